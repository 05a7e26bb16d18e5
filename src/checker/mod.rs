mod checks;
mod directive;
mod inspector;
mod line;
mod result;
mod rule;

pub use checks::{LineChecks, LineContext};
pub use directive::{Directive, Suppression};
pub use inspector::{Inspector, Issue};
pub use line::{Line, is_line_comment, is_section_header, split_lines};
pub use result::{FileTask, Finding, InspectionResult};
pub use rule::Rule;

pub trait Checker {
    /// Inspect one file against its resolved rules.
    ///
    /// Per-file problems (unreadable or binary content) are reported as
    /// findings, never as errors.
    fn check(&self, task: &FileTask) -> Vec<Finding>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
