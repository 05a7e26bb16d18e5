use std::fs;
use std::path::Path;

use crate::config::RuleConfig;

use super::checks::{LineChecks, LineContext};
use super::directive::Suppression;
use super::line::{Line, split_lines};
use super::result::{FileTask, Finding};
use super::rule::Rule;
use super::Checker;

const UTF8_BOM: char = '\u{feff}';

/// A rule violation inside one file's contents, before a path is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// 1-based line number.
    pub line: usize,
    pub rule: Rule,
    pub message: String,
}

/// The rule engine: walks a file's lines and applies every enabled rule.
#[derive(Default)]
pub struct Inspector {
    checks: LineChecks,
}

impl Inspector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect file contents.
    ///
    /// Issues are ordered by line, then by rule declaration order.
    #[must_use]
    pub fn inspect(&self, contents: &str, config: &RuleConfig) -> Vec<Issue> {
        let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
        let lines = split_lines(contents);
        let suppression = Suppression::scan(&lines);
        let trailing_start = trailing_blank_start(&lines);

        let mut issues = Vec::new();
        let mut blank_run = 0;

        for (index, line) in lines.iter().enumerate() {
            blank_run = if line.is_blank() { blank_run + 1 } else { 0 };

            if suppression.is_suppressed(index) {
                continue;
            }

            let ctx = LineContext {
                number: index + 1,
                line: *line,
                prev: index.checked_sub(1).map(|i| lines[i]),
                next: lines.get(index + 1).copied(),
                blank_run,
                starts_trailing_blanks: trailing_start == Some(index),
            };

            for rule in Rule::ALL {
                if !config.is_enabled(rule) {
                    continue;
                }
                if let Some(message) = self.checks.evaluate(rule, &ctx, config) {
                    issues.push(Issue {
                        line: ctx.number,
                        rule,
                        message,
                    });
                }
            }
        }

        if let Some(off_line) = suppression.unclosed_off
            && config.is_enabled(Rule::UnclosedDirective)
        {
            issues.push(Issue {
                line: off_line,
                rule: Rule::UnclosedDirective,
                message: "CodeDust should be re-enabled afterwards.".to_string(),
            });
        }

        issues.sort_by_key(|issue| (issue.line, issue.rule));
        issues
    }

    /// Read and inspect one file.
    ///
    /// A file that cannot be read or is not UTF-8 text yields a single
    /// [`Rule::UnreadableFile`] finding instead of an error.
    #[must_use]
    pub fn inspect_file(&self, path: &Path, config: &RuleConfig) -> Vec<Finding> {
        match read_text(path) {
            Ok(contents) => self
                .inspect(&contents, config)
                .into_iter()
                .map(|issue| Finding::new(path, issue.line, issue.rule, issue.message))
                .collect(),
            Err(reason) => {
                tracing::warn!("Skipping {}: {reason}", path.display());
                if config.is_enabled(Rule::UnreadableFile) {
                    vec![Finding::new(path, 1, Rule::UnreadableFile, reason)]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

impl Checker for Inspector {
    fn check(&self, task: &FileTask) -> Vec<Finding> {
        tracing::debug!("Inspecting {} as .{}", task.path.display(), task.extension);
        self.inspect_file(&task.path, &task.config)
    }
}

/// Index of the first line of the blank block ending the file, if any.
fn trailing_blank_start(lines: &[Line<'_>]) -> Option<usize> {
    let trailing = lines.iter().rev().take_while(|line| line.is_blank()).count();
    (trailing > 0).then(|| lines.len() - trailing)
}

fn read_text(path: &Path) -> std::result::Result<String, String> {
    let bytes = fs::read(path).map_err(|e| format!("Cannot read file: {e}"))?;
    if bytes.contains(&0) {
        return Err("Cannot inspect binary file.".to_string());
    }
    String::from_utf8(bytes).map_err(|_| "Cannot decode file as UTF-8 text.".to_string())
}

#[cfg(test)]
#[path = "inspector_tests.rs"]
mod tests;
