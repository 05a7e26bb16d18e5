use std::path::Path;

use regex::Regex;

use crate::error::{CodeDustError, Result};

/// Characters that turn an ignore pattern into a regular expression.
const REGEX_META: &[char] = &['.', '^', '$', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '\\'];

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// One `--ignore` pattern, searched anywhere in a `/`-separated path.
#[derive(Debug, Clone)]
pub enum IgnorePattern {
    Literal(String),
    Regex(Regex),
}

impl IgnorePattern {
    /// Compile a pattern. Plain text is matched as a substring; a pattern
    /// wrapped in slashes (`/node_modules/`) is matched by its body alone.
    ///
    /// # Errors
    /// Returns an error if the pattern is empty or is an invalid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = strip_delimiters(pattern);
        if pattern.is_empty() {
            return Err(CodeDustError::Config(
                "Ignore pattern must not be empty".to_string(),
            ));
        }
        if !pattern.contains(REGEX_META) {
            return Ok(Self::Literal(pattern.to_string()));
        }
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|source| CodeDustError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn is_match(&self, normalized_path: &str) -> bool {
        match self {
            Self::Literal(text) => normalized_path.contains(text.as_str()),
            Self::Regex(regex) => regex.is_match(normalized_path),
        }
    }
}

fn strip_delimiters(pattern: &str) -> &str {
    pattern
        .strip_prefix('/')
        .and_then(|p| p.strip_suffix('/'))
        .filter(|body| !body.is_empty())
        .unwrap_or(pattern)
}

/// Selects files by extension and rejects paths hit by any ignore pattern.
pub struct ExtensionFilter {
    extensions: Vec<String>,
    ignore: Vec<IgnorePattern>,
}

impl ExtensionFilter {
    /// Create a filter for the given extensions (without leading dots).
    ///
    /// # Errors
    /// Returns an error if any ignore pattern is invalid.
    pub fn new(extensions: Vec<String>, ignore_patterns: &[String]) -> Result<Self> {
        let ignore = ignore_patterns
            .iter()
            .map(|p| IgnorePattern::new(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { extensions, ignore })
    }

    /// The configured extension of `path`, if it is one we select.
    #[must_use]
    pub fn matched_extension(&self, path: &Path) -> Option<&str> {
        let ext = file_extension(path)?;
        self.extensions
            .iter()
            .find(|e| e.as_str() == ext)
            .map(String::as_str)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        self.ignore.iter().any(|p| p.is_match(&normalized))
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.matched_extension(path).is_some() && !self.is_ignored(path)
    }
}

/// Suffix after the last `.` of the file name; dotfiles like `.bashrc` have none.
#[must_use]
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Render a path with `/` separators for pattern matching and display.
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
