mod filter;

pub use filter::{ExtensionFilter, FileFilter, IgnorePattern, file_extension, normalize_path};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CodeDustError, Result};

/// A file picked for inspection together with its matched extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub extension: String,
}

/// Files found under one root, plus entries that could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Everything `select` picked across all roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub files: Vec<SelectedFile>,
    /// Entries below a root that were unreadable and left out.
    pub skipped: Vec<PathBuf>,
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a root and return all matching file paths, sorted by their
    /// `/`-separated string form.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or cannot be read.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    fn scan_impl(&self, root: &Path) -> Result<ScanResult> {
        let mut result = ScanResult::default();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                // An unreadable root aborts; unreadable subdirectories are skipped.
                Err(source) if source.depth() == 0 => {
                    return Err(CodeDustError::PathRead {
                        path: root.to_path_buf(),
                        source,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {e}");
                    result
                        .skipped
                        .push(e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf));
                    continue;
                }
            };
            // `Path::is_file` follows symlinks, so linked source files are kept.
            if entry.path().is_file() && self.filter.should_include(entry.path()) {
                result.files.push(entry.into_path());
            } else if entry.path_is_symlink() && !entry.path().exists() {
                tracing::debug!("Skipping dangling symlink {}", entry.path().display());
            }
        }

        result.files.sort_by_cached_key(|path| normalize_path(path));
        Ok(result)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        if !root.exists() {
            return Err(CodeDustError::PathNotFound(root.to_path_buf()));
        }
        self.scan_impl(root)
    }
}

/// Enumerate the files to inspect under `paths`, in root order.
///
/// # Errors
/// Returns an error for an invalid ignore pattern or a missing or unreadable root.
pub fn select(
    paths: &[PathBuf],
    extensions: &[String],
    ignore_patterns: &[String],
) -> Result<Selection> {
    let filter = ExtensionFilter::new(extensions.to_vec(), ignore_patterns)?;
    let scanner = DirectoryScanner::new(filter);

    let mut selection = Selection::default();
    for root in paths {
        let scanned = scanner.scan(root)?;
        tracing::debug!(
            "Selected {} file(s) under {}",
            scanned.files.len(),
            root.display()
        );

        selection
            .files
            .extend(scanned.files.into_iter().filter_map(|path| {
                let extension = scanner.filter().matched_extension(&path)?.to_string();
                Some(SelectedFile { path, extension })
            }));
        selection.skipped.extend(scanned.skipped);
    }

    Ok(selection)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
