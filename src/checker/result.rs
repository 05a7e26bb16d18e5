use std::path::{Path, PathBuf};

use crate::config::RuleConfig;

use super::rule::Rule;

/// A file queued for inspection together with its effective rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub path: PathBuf,
    pub extension: String,
    pub config: RuleConfig,
}

impl FileTask {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, extension: impl Into<String>, config: RuleConfig) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
            config,
        }
    }
}

/// One rule violation at a specific line of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    pub rule: Rule,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, line: usize, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line,
            rule,
            message: message.into(),
        }
    }
}

/// All findings of one run, in file order then line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionResult {
    findings: Vec<Finding>,
    files_inspected: usize,
    skipped: Vec<PathBuf>,
}

impl InspectionResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one inspected file and its findings.
    pub fn push_file(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.files_inspected += 1;
        self.findings.extend(findings);
    }

    /// Record entries the selector could not read.
    pub fn record_skipped(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.skipped.extend(paths);
    }

    /// Entries below a root that were left out because they were unreadable.
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    #[must_use]
    pub const fn files_inspected(&self) -> usize {
        self.files_inspected
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of distinct files with at least one finding.
    #[must_use]
    pub fn files_with_findings(&self) -> usize {
        self.by_file().count()
    }

    /// Findings grouped per file, preserving inspection order.
    pub fn by_file(&self) -> impl Iterator<Item = (&Path, &[Finding])> {
        self.findings
            .chunk_by(|a, b| a.path == b.path)
            .map(|group| (group[0].path.as_path(), group))
    }
}

impl FromIterator<Vec<Finding>> for InspectionResult {
    fn from_iter<I: IntoIterator<Item = Vec<Finding>>>(iter: I) -> Self {
        let mut result = Self::new();
        for findings in iter {
            result.push_file(findings);
        }
        result
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
