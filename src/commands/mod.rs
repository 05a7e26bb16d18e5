pub mod context;
pub mod inspect;

pub use context::{color_choice_to_mode, load_config, normalize_extensions};
pub use inspect::{inspect_files, render_result, run_inspect};
