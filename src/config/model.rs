use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::checker::Rule;

/// Name of the section every extension inherits from.
pub const DEFAULT_SECTION: &str = "default";

pub const DEFAULT_INDENT_SIZE: usize = 4;
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;
pub const DEFAULT_SECTION_HEADER_LENGTH: usize = 100;
pub const DEFAULT_MAX_BLANK_LINES: usize = 1;

/// Options of one config section, keyed by lower-cased option name.
pub type SectionOptions = IndexMap<String, String>;

/// Raw config file contents: section name -> (option name -> value).
///
/// Sections keep file order so diagnostics are reported deterministically.
pub type ConfigSections = IndexMap<String, SectionOptions>;

/// Effective, extension-specific rule settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// Width of one indentation level, in spaces.
    pub indent_size: usize,

    /// Longest line allowed, in characters.
    pub max_line_length: usize,

    /// Exact length a section header line must have.
    pub section_header_length: usize,

    /// Consecutive blank lines allowed before each further one is reported.
    pub max_blank_lines: usize,

    /// Line comment marker (e.g. `#`, `//`). Comment rules are off when unset.
    pub line_comment: Option<String>,

    /// Rules turned off for this extension.
    pub disabled_rules: BTreeSet<Rule>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            section_header_length: DEFAULT_SECTION_HEADER_LENGTH,
            max_blank_lines: DEFAULT_MAX_BLANK_LINES,
            line_comment: None,
            disabled_rules: BTreeSet::new(),
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub fn is_enabled(&self, rule: Rule) -> bool {
        !self.disabled_rules.contains(&rule)
    }
}

#[cfg(test)]
impl RuleConfig {
    #[must_use]
    pub fn with_disabled(mut self, rule: Rule) -> Self {
        self.disabled_rules.insert(rule);
        self
    }

    #[must_use]
    pub fn with_line_comment(mut self, marker: &str) -> Self {
        self.line_comment = Some(marker.to_string());
        self
    }
}
