use std::fmt::Write;

use crate::checker::{Finding, InspectionResult};
use crate::error::Result;
use crate::scanner::normalize_path;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// One line per finding, `<path>:<line>: [<rule>] <message>`, then a summary.
pub struct TextFormatter {
    use_colors: bool,
    quiet: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            quiet: false,
        }
    }

    /// Omit the trailing summary line.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let tag = self.colorize(&format!("[{}]", finding.rule), ansi::YELLOW);
        let _ = writeln!(
            output,
            "{}:{}: {tag} {}",
            normalize_path(&finding.path),
            finding.line,
            finding.message
        );
    }

    fn format_summary(&self, result: &InspectionResult) -> String {
        let issues = result.findings().len();
        let count = if issues == 0 {
            issues.to_string()
        } else {
            self.colorize(&issues.to_string(), ansi::RED)
        };
        let mut summary = format!(
            "{count} issue(s) in {} file(s) inspected",
            result.files_inspected()
        );
        let skipped = result.skipped().len();
        if skipped > 0 {
            let skipped = self.colorize(&skipped.to_string(), ansi::YELLOW);
            let _ = write!(summary, ", {skipped} unreadable entry(ies) skipped");
        }
        summary
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &InspectionResult) -> Result<String> {
        let mut output = String::new();

        for (_, findings) in result.by_file() {
            for finding in findings {
                self.format_finding(finding, &mut output);
            }
        }

        if !self.quiet {
            let summary = self.format_summary(result);
            let _ = writeln!(output, "{summary}");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
