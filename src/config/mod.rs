mod filesystem;
mod ini;
mod loader;
mod model;
mod resolve;

pub use filesystem::{FileSystem, RealFileSystem};
pub use ini::parse_ini;
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    ConfigSections, DEFAULT_INDENT_SIZE, DEFAULT_MAX_BLANK_LINES, DEFAULT_MAX_LINE_LENGTH,
    DEFAULT_SECTION, DEFAULT_SECTION_HEADER_LENGTH, RuleConfig, SectionOptions,
};
pub use resolve::{resolve, resolve_all};
