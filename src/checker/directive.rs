//! Inline `CodeDust:` directives.
//!
//! - `... CodeDust: SKIP` at the end of a line skips that line
//! - `... CodeDust: OFF` stops inspection until a line ending in `CodeDust: ON`

use super::line::Line;

const SKIP_DIRECTIVE: &str = " CodeDust: SKIP";
const OFF_DIRECTIVE: &str = " CodeDust: OFF";
const ON_DIRECTIVE: &str = " CodeDust: ON";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Skip,
    Off,
    On,
}

impl Directive {
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim_end();
        if text.ends_with(SKIP_DIRECTIVE) {
            Some(Self::Skip)
        } else if text.ends_with(OFF_DIRECTIVE) {
            Some(Self::Off)
        } else if text.ends_with(ON_DIRECTIVE) {
            Some(Self::On)
        } else {
            None
        }
    }
}

/// Which lines are exempt from inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    suppressed: Vec<bool>,
    /// Line number of an `OFF` directive that was never turned back on.
    pub unclosed_off: Option<usize>,
}

impl Suppression {
    #[must_use]
    pub fn scan(lines: &[Line<'_>]) -> Self {
        let mut suppressed = Vec::with_capacity(lines.len());
        let mut enabled = true;
        let mut unclosed_off = None;

        for (index, line) in lines.iter().enumerate() {
            let directive = Directive::parse(line.text);
            match directive {
                Some(Directive::Off) => {
                    enabled = false;
                    unclosed_off = Some(index + 1);
                }
                Some(Directive::On) => {
                    enabled = true;
                    unclosed_off = None;
                }
                Some(Directive::Skip) | None => {}
            }
            suppressed.push(!enabled || directive == Some(Directive::Skip));
        }

        Self {
            suppressed,
            unclosed_off,
        }
    }

    /// Whether the 0-based line `index` is exempt.
    #[must_use]
    pub fn is_suppressed(&self, index: usize) -> bool {
        self.suppressed.get(index).copied().unwrap_or(false)
    }
}
