//! Per-extension rule resolution.
//!
//! The effective settings for an extension are the built-in defaults,
//! overlaid with the `default` section, overlaid with the section named
//! exactly like the extension. Each option is a scalar, so overlaying is a
//! per-key overwrite.

use indexmap::IndexMap;

use crate::checker::Rule;
use crate::error::{CodeDustError, Result};

use super::model::{ConfigSections, DEFAULT_SECTION, RuleConfig, SectionOptions};

/// Resolve the effective [`RuleConfig`] for one extension.
///
/// Unknown option keys are ignored.
///
/// # Errors
/// Returns [`CodeDustError::Config`] if a numeric option is not a positive
/// integer or a rule toggle has an unrecognized value.
pub fn resolve(sections: &ConfigSections, extension: &str) -> Result<RuleConfig> {
    let mut config = RuleConfig::default();

    if let Some(defaults) = sections.get(DEFAULT_SECTION) {
        apply_section(&mut config, DEFAULT_SECTION, defaults)?;
    }

    if extension != DEFAULT_SECTION
        && let Some(overrides) = sections.get(extension)
    {
        apply_section(&mut config, extension, overrides)?;
    }

    Ok(config)
}

/// Resolve every requested extension up front, in the order given.
///
/// # Errors
/// Returns the first resolution error encountered.
pub fn resolve_all(
    sections: &ConfigSections,
    extensions: &[String],
) -> Result<IndexMap<String, RuleConfig>> {
    extensions
        .iter()
        .map(|ext| resolve(sections, ext).map(|config| (ext.clone(), config)))
        .collect()
}

fn apply_section(config: &mut RuleConfig, section: &str, options: &SectionOptions) -> Result<()> {
    for (key, value) in options {
        match key.as_str() {
            "indent_size" => config.indent_size = parse_positive(section, key, value)?,
            "max_line_length" => config.max_line_length = parse_positive(section, key, value)?,
            "section_header_length" => {
                config.section_header_length = parse_positive(section, key, value)?;
            }
            "max_blank_lines" => config.max_blank_lines = parse_positive(section, key, value)?,
            "line_comment" => {
                config.line_comment = (!value.is_empty()).then(|| value.clone());
            }
            _ => {
                if let Some(rule) = Rule::from_config_key(key) {
                    if parse_toggle(section, key, value)? {
                        config.disabled_rules.remove(&rule);
                    } else {
                        config.disabled_rules.insert(rule);
                    }
                }
            }
        }
    }
    Ok(())
}

fn parse_positive(section: &str, key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CodeDustError::Config(format!(
            "[{section}] {key} must be a positive integer, got '{value}'"
        ))),
    }
}

fn parse_toggle(section: &str, key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "enable" | "enabled" | "on" | "true" => Ok(true),
        "disable" | "disabled" | "off" | "false" => Ok(false),
        _ => Err(CodeDustError::Config(format!(
            "[{section}] {key} must be 'enable' or 'disable', got '{value}'"
        ))),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
