use std::path::{Path, PathBuf};

use crate::error::{CodeDustError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::ini::parse_ini;
use super::model::ConfigSections;

/// Config file picked up from the working directory when `--config` is absent.
pub const LOCAL_CONFIG_NAME: &str = ".codedust.ini";

/// Result of loading a configuration, containing the sections and where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadResult {
    /// Parsed config sections (empty when no file was found).
    pub sections: ConfigSections,
    /// The file the sections were read from, if any.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to no sections.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist, cannot be read, or is malformed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        if let Some(local_path) = self.local_config_path()
            && self.fs.is_file(&local_path)
        {
            tracing::debug!("Found project config: {}", local_path.display());
            return self.load_from_path(&local_path);
        }

        tracing::debug!("No {LOCAL_CONFIG_NAME} found; using built-in defaults");
        Ok(LoadResult::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        if !self.fs.is_file(path) {
            return Err(CodeDustError::Config(format!(
                "File not found: '{}'",
                path.display()
            )));
        }

        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| CodeDustError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let sections = parse_ini(&content, path)?;
        tracing::debug!(
            "Loaded {} config section(s) from {}",
            sections.len(),
            path.display()
        );

        Ok(LoadResult {
            sections,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
