//! Per-line rule predicates.
//!
//! Each rule looks at one line plus its immediate neighbours and returns a
//! message when it fires. Rules never look further than one line away; the
//! few file-level facts they need (blank-run length, trailing blank block,
//! last line) are precomputed into [`LineContext`].

use regex::Regex;

use crate::config::RuleConfig;

use super::line::{Line, is_line_comment, is_section_header};
use super::rule::Rule;

const OPENING_BRACKETS: [char; 4] = ['{', '[', '(', '<'];
const CLOSING_BRACKETS: [char; 4] = ['}', ']', ')', '>'];

/// Lines containing this are exempt from the `=` spacing rules.
const EQUALS_RULER: &str = "====";

/// A line together with the context the rules need.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// 1-based line number.
    pub number: usize,
    pub line: Line<'a>,
    pub prev: Option<Line<'a>>,
    pub next: Option<Line<'a>>,
    /// Length of the blank run ending at this line (0 for non-blank lines).
    pub blank_run: usize,
    /// First line of the blank block that ends the file.
    pub starts_trailing_blanks: bool,
}

impl LineContext<'_> {
    const fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Compiled patterns for the punctuation spacing rules.
pub struct LineChecks {
    comma_without_space: Regex,
    semicolon_without_space: Regex,
    equals_without_space_before: Regex,
    equals_without_space_after: Regex,
}

impl Default for LineChecks {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChecks {
    #[must_use]
    pub fn new() -> Self {
        Self {
            comma_without_space: Regex::new(r",[\w(]").expect("Invalid regex"),
            semicolon_without_space: Regex::new(r";[\w(]").expect("Invalid regex"),
            equals_without_space_before: Regex::new(r#"[a-z0-9)\]}"']="#).expect("Invalid regex"),
            equals_without_space_after: Regex::new(r#"=[a-z0-9(\[{"']"#).expect("Invalid regex"),
        }
    }

    /// Evaluate one rule against one line. Returns the finding message if it fires.
    #[must_use]
    pub fn evaluate(&self, rule: Rule, ctx: &LineContext<'_>, config: &RuleConfig) -> Option<String> {
        match rule {
            Rule::TrailingWhitespace | Rule::LineTooLong | Rule::SectionHeaderLength => {
                Self::layout(rule, ctx, config)
            }
            Rule::TabIndentation | Rule::IndentSize | Rule::OverIndentation => {
                Self::indentation(rule, ctx, config)
            }
            Rule::ExcessiveBlankLines
            | Rule::TrailingBlankLines
            | Rule::MissingFinalNewline
            | Rule::LeadingBlankLines
            | Rule::BlankLineAfterOpeningBracket
            | Rule::BlankLineBeforeClosingBracket
            | Rule::BlankLineAfterSectionHeader => Self::blank_lines(rule, ctx, config),
            Rule::MultipleSpaces
            | Rule::SpaceBeforeComma
            | Rule::SpaceBeforeSemicolon
            | Rule::SpaceAfterOpeningParen
            | Rule::SpaceBeforeClosingParen
            | Rule::MissingSpaceAfterComma
            | Rule::MissingSpaceAfterSemicolon
            | Rule::MissingSpaceBeforeEquals
            | Rule::MissingSpaceAfterEquals => self.spacing(rule, ctx.line.text),
            Rule::MissingSpaceAfterCommentMarker | Rule::MissingSpaceBeforeCommentMarker => {
                Self::comments(rule, ctx.line.text, config)
            }
            // File-level rules, produced by the inspector itself.
            Rule::UnclosedDirective | Rule::UnreadableFile => None,
        }
    }

    fn layout(rule: Rule, ctx: &LineContext<'_>, config: &RuleConfig) -> Option<String> {
        let text = ctx.line.text;
        match rule {
            Rule::TrailingWhitespace => text
                .ends_with([' ', '\t'])
                .then(|| "There should be no whitespace at the end of a line.".to_string()),
            Rule::LineTooLong => {
                let length = ctx.line.char_count();
                (length > config.max_line_length).then(|| {
                    format!(
                        "Line is {length} characters long, maximum is {}.",
                        config.max_line_length
                    )
                })
            }
            Rule::SectionHeaderLength => {
                let length = text.trim().chars().count();
                (is_section_header(text) && length != config.section_header_length).then(|| {
                    format!(
                        "Section header is {length} characters long, it should be {}.",
                        config.section_header_length
                    )
                })
            }
            _ => None,
        }
    }

    fn indentation(rule: Rule, ctx: &LineContext<'_>, config: &RuleConfig) -> Option<String> {
        if ctx.line.is_blank() {
            return None;
        }

        let leading = ctx.line.leading_whitespace();
        let size = config.indent_size;
        let has_tab = leading.contains('\t');

        match rule {
            Rule::TabIndentation if has_tab => Some(if leading.contains(' ') {
                format!("Indentation mixes tabs and spaces, use {size} spaces per level.")
            } else {
                format!("Don't use tabs for indentation, use {size} spaces per level.")
            }),
            Rule::IndentSize if !has_tab && size > 0 && leading.len() % size != 0 => {
                Some(format!("Use {size} spaces per indentation level."))
            }
            Rule::OverIndentation => {
                let prev = ctx.prev.filter(|p| !p.is_blank())?;
                (ctx.line.indent() > prev.indent() + size).then(|| {
                    format!("Don't indent for more than one level ({size} spaces) at a time.")
                })
            }
            _ => None,
        }
    }

    fn blank_lines(rule: Rule, ctx: &LineContext<'_>, config: &RuleConfig) -> Option<String> {
        if rule == Rule::MissingFinalNewline {
            return (ctx.is_last() && !ctx.line.terminated)
                .then(|| "There should be a line break at the end of the file.".to_string());
        }

        if !ctx.line.is_blank() {
            return None;
        }

        let message = match rule {
            Rule::ExcessiveBlankLines if ctx.blank_run > config.max_blank_lines => format!(
                "There should be no more than {} consecutive empty line(s).",
                config.max_blank_lines
            ),
            Rule::TrailingBlankLines if ctx.starts_trailing_blanks => {
                "There should be no empty lines at the end of the file.".to_string()
            }
            Rule::LeadingBlankLines if ctx.number == 1 => {
                "There should be no empty lines at the start of the file.".to_string()
            }
            Rule::BlankLineAfterOpeningBracket
                if ctx
                    .prev
                    .is_some_and(|p| p.text.trim().ends_with(OPENING_BRACKETS)) =>
            {
                "There should be no empty lines at the start of a parenthesis block.".to_string()
            }
            Rule::BlankLineBeforeClosingBracket
                if ctx
                    .next
                    .is_some_and(|n| n.text.trim().starts_with(CLOSING_BRACKETS)) =>
            {
                "There should be no empty lines at the end of a parenthesis block.".to_string()
            }
            Rule::BlankLineAfterSectionHeader
                if ctx.prev.is_some_and(|p| is_section_header(p.text))
                    && !ctx.next.is_some_and(|n| {
                        is_line_comment(n.text, config.line_comment.as_deref())
                    }) =>
            {
                "There should be no empty lines after the section header.".to_string()
            }
            _ => return None,
        };
        Some(message)
    }

    fn spacing(&self, rule: Rule, text: &str) -> Option<String> {
        let trimmed = text.trim();
        let fires = match rule {
            Rule::MultipleSpaces => trimmed.contains("  "),
            Rule::SpaceBeforeComma => trimmed.contains(" ,"),
            Rule::SpaceBeforeSemicolon => trimmed.contains(" ;"),
            Rule::SpaceAfterOpeningParen => trimmed.contains("( "),
            Rule::SpaceBeforeClosingParen => trimmed.contains(" )"),
            Rule::MissingSpaceAfterComma => self.comma_without_space.is_match(text),
            Rule::MissingSpaceAfterSemicolon => self.semicolon_without_space.is_match(text),
            Rule::MissingSpaceBeforeEquals => {
                !text.contains(EQUALS_RULER) && self.equals_without_space_before.is_match(text)
            }
            Rule::MissingSpaceAfterEquals => {
                !text.contains(EQUALS_RULER) && self.equals_without_space_after.is_match(text)
            }
            _ => false,
        };

        let message = match rule {
            Rule::MultipleSpaces => "There should be no multiple consecutive spaces in a line.",
            Rule::SpaceBeforeComma => "There should be no space before comma.",
            Rule::SpaceBeforeSemicolon => "There should be no space before semicolon.",
            Rule::SpaceAfterOpeningParen => "There should be no space after opening parentheses.",
            Rule::SpaceBeforeClosingParen => {
                "There should be no space before closing parentheses."
            }
            Rule::MissingSpaceAfterComma => "There should be a space after comma.",
            Rule::MissingSpaceAfterSemicolon => "There should be a space after semicolon.",
            Rule::MissingSpaceBeforeEquals => "There should be a space before equal sign.",
            Rule::MissingSpaceAfterEquals => "There should be a space after equal sign.",
            _ => return None,
        };

        fires.then(|| message.to_string())
    }

    fn comments(rule: Rule, text: &str, config: &RuleConfig) -> Option<String> {
        let marker = config.line_comment.as_deref().filter(|m| !m.is_empty())?;
        if !text.contains(marker) || is_section_header(text) {
            return None;
        }

        match rule {
            Rule::MissingSpaceAfterCommentMarker
                if !text.contains(&format!("{marker} ")) && !text.trim_end().ends_with(marker) =>
            {
                Some(
                    "There should be a space between comment syntax characters and comment text."
                        .to_string(),
                )
            }
            Rule::MissingSpaceBeforeCommentMarker
                if !text.contains(&format!(" {marker}"))
                    && !is_line_comment(text, Some(marker)) =>
            {
                Some("There should be a space before comment syntax characters.".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
