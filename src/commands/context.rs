use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{CodeDustError, Result};
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load the INI configuration for this run.
///
/// An explicit path must exist. Without one, `.codedust.ini` in the working
/// directory is used when present.
///
/// # Errors
/// Returns an error if the configuration file is missing, unreadable or malformed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        tracing::debug!("Configuration loading disabled");
        return Ok(LoadResult::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Trim extensions, drop a leading dot and remove blanks and duplicates.
///
/// # Errors
/// Returns an error if no usable extension remains.
pub fn normalize_extensions(raw: &[String]) -> Result<Vec<String>> {
    let mut extensions: Vec<String> = Vec::new();
    for ext in raw {
        let ext = ext.trim().trim_start_matches('.');
        if !ext.is_empty() && !extensions.iter().any(|e| e == ext) {
            extensions.push(ext.to_string());
        }
    }

    if extensions.is_empty() {
        return Err(CodeDustError::Config(
            "At least one non-empty extension is required".to_string(),
        ));
    }
    Ok(extensions)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
