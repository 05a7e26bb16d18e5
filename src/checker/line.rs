//! Line splitting and the small text predicates the rules are built on.

/// Characters that may form a section header line.
const SECTION_HEADER_CHARS: [char; 3] = ['#', '/', '-'];

/// Shortest run of delimiter characters treated as a section header.
const MIN_SECTION_HEADER_LEN: usize = 3;

/// One physical line of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Content without the line terminator (`\n` or `\r\n`).
    pub text: &'a str,
    /// Whether the line ended with `\n`.
    pub terminated: bool,
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Leading run of spaces and tabs.
    #[must_use]
    pub fn leading_whitespace(&self) -> &'a str {
        let text = self.text;
        let end = text
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(text.len());
        &text[..end]
    }

    /// Number of leading spaces, stopping at the first non-space character.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.text.chars().take_while(|&c| c == ' ').count()
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split file contents into lines the way `readlines` does: every line keeps
/// track of its terminator, and a final unterminated fragment is a line too.
#[must_use]
pub fn split_lines(contents: &str) -> Vec<Line<'_>> {
    contents
        .split_inclusive('\n')
        .map(|raw| match raw.strip_suffix('\n') {
            Some(body) => Line {
                text: body.strip_suffix('\r').unwrap_or(body),
                terminated: true,
            },
            None => Line {
                text: raw,
                terminated: false,
            },
        })
        .collect()
}

/// A line made only of one repeated delimiter character, e.g. a row of `#`.
#[must_use]
pub fn is_section_header(text: &str) -> bool {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    SECTION_HEADER_CHARS.contains(&first)
        && chars.all(|c| c == first)
        && trimmed.chars().count() >= MIN_SECTION_HEADER_LEN
}

/// A line whose first non-blank characters are the comment marker.
#[must_use]
pub fn is_line_comment(text: &str, marker: Option<&str>) -> bool {
    marker.is_some_and(|m| !m.is_empty() && text.trim_start().starts_with(m))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
