//! Minimal INI reader for `.codedust.ini` files.
//!
//! Supported syntax:
//! - `[section]` headers (names kept verbatim)
//! - `key = value` or `key: value` pairs (keys lower-cased, both sides trimmed)
//! - full-line comments starting with `#` or `;`, and blank lines
//!
//! Values are kept as raw strings; typing happens when a section is resolved.

use std::path::Path;

use crate::error::{CodeDustError, Result};

use super::model::{ConfigSections, SectionOptions};

/// Parse INI text into ordered sections.
///
/// `origin` is only used for error messages.
///
/// # Errors
/// Returns [`CodeDustError::ConfigSyntax`] for a malformed header, a pair
/// outside any section, or a line that is neither.
pub fn parse_ini(content: &str, origin: &Path) -> Result<ConfigSections> {
    let mut sections = ConfigSections::new();
    let mut current: Option<String> = None;

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            let name = parse_header(line)
                .ok_or_else(|| syntax_error(origin, line_number, "malformed section header"))?;
            sections.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        let Some((key, value)) = split_pair(line) else {
            return Err(syntax_error(
                origin,
                line_number,
                "expected `key = value` or `[section]`",
            ));
        };

        let Some(section) = current.as_ref() else {
            return Err(syntax_error(
                origin,
                line_number,
                "option defined before any section header",
            ));
        };

        sections
            .entry(section.clone())
            .or_insert_with(SectionOptions::new)
            .insert(key.to_lowercase(), value.to_string());
    }

    Ok(sections)
}

fn parse_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    if name.is_empty() || name.contains(['[', ']']) {
        return None;
    }
    Some(name)
}

/// Split on the first `=` or `:`, whichever comes first.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let at = line.find(['=', ':'])?;
    let key = line[..at].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[at + 1..].trim()))
}

fn syntax_error(origin: &Path, line: usize, message: &str) -> CodeDustError {
    CodeDustError::ConfigSyntax {
        path: origin.to_path_buf(),
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "ini_tests.rs"]
mod tests;
