use std::fmt;

/// Every check the inspector knows about.
///
/// Variant order is significant: when several rules fire on the same line,
/// findings are emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    TrailingWhitespace,
    LineTooLong,
    TabIndentation,
    IndentSize,
    OverIndentation,
    ExcessiveBlankLines,
    SectionHeaderLength,
    TrailingBlankLines,
    MissingFinalNewline,
    LeadingBlankLines,
    BlankLineAfterOpeningBracket,
    BlankLineBeforeClosingBracket,
    BlankLineAfterSectionHeader,
    MultipleSpaces,
    SpaceBeforeComma,
    SpaceBeforeSemicolon,
    SpaceAfterOpeningParen,
    SpaceBeforeClosingParen,
    MissingSpaceAfterComma,
    MissingSpaceAfterSemicolon,
    MissingSpaceBeforeEquals,
    MissingSpaceAfterEquals,
    MissingSpaceAfterCommentMarker,
    MissingSpaceBeforeCommentMarker,
    UnclosedDirective,
    UnreadableFile,
}

impl Rule {
    /// All rules in declaration order.
    pub const ALL: [Self; 26] = [
        Self::TrailingWhitespace,
        Self::LineTooLong,
        Self::TabIndentation,
        Self::IndentSize,
        Self::OverIndentation,
        Self::ExcessiveBlankLines,
        Self::SectionHeaderLength,
        Self::TrailingBlankLines,
        Self::MissingFinalNewline,
        Self::LeadingBlankLines,
        Self::BlankLineAfterOpeningBracket,
        Self::BlankLineBeforeClosingBracket,
        Self::BlankLineAfterSectionHeader,
        Self::MultipleSpaces,
        Self::SpaceBeforeComma,
        Self::SpaceBeforeSemicolon,
        Self::SpaceAfterOpeningParen,
        Self::SpaceBeforeClosingParen,
        Self::MissingSpaceAfterComma,
        Self::MissingSpaceAfterSemicolon,
        Self::MissingSpaceBeforeEquals,
        Self::MissingSpaceAfterEquals,
        Self::MissingSpaceAfterCommentMarker,
        Self::MissingSpaceBeforeCommentMarker,
        Self::UnclosedDirective,
        Self::UnreadableFile,
    ];

    /// Stable code used in config files (e.g. `CD0104 = disable`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnreadableFile => "CD0001",
            Self::UnclosedDirective => "CD0002",
            Self::LeadingBlankLines => "CD0101",
            Self::TrailingBlankLines => "CD0102",
            Self::MissingFinalNewline => "CD0103",
            Self::ExcessiveBlankLines => "CD0104",
            Self::BlankLineAfterOpeningBracket => "CD0105",
            Self::BlankLineBeforeClosingBracket => "CD0106",
            Self::BlankLineAfterSectionHeader => "CD0107",
            Self::MultipleSpaces => "CD0201",
            Self::TrailingWhitespace => "CD0202",
            Self::SpaceBeforeComma => "CD0203",
            Self::SpaceBeforeSemicolon => "CD0204",
            Self::SpaceAfterOpeningParen => "CD0205",
            Self::SpaceBeforeClosingParen => "CD0206",
            Self::MissingSpaceAfterComma => "CD0207",
            Self::MissingSpaceAfterSemicolon => "CD0208",
            Self::MissingSpaceBeforeEquals => "CD0209",
            Self::MissingSpaceAfterEquals => "CD0210",
            Self::TabIndentation => "CD0301",
            Self::IndentSize => "CD0302",
            Self::OverIndentation => "CD0303",
            Self::LineTooLong => "CD0401",
            Self::SectionHeaderLength => "CD0402",
            Self::MissingSpaceAfterCommentMarker => "CD0501",
            Self::MissingSpaceBeforeCommentMarker => "CD0502",
        }
    }

    /// Identifier shown in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrailingWhitespace => "TrailingWhitespace",
            Self::LineTooLong => "LineTooLong",
            Self::TabIndentation => "TabIndentation",
            Self::IndentSize => "IndentSize",
            Self::OverIndentation => "OverIndentation",
            Self::ExcessiveBlankLines => "ExcessiveBlankLines",
            Self::SectionHeaderLength => "SectionHeaderLength",
            Self::TrailingBlankLines => "TrailingBlankLines",
            Self::MissingFinalNewline => "MissingFinalNewline",
            Self::LeadingBlankLines => "LeadingBlankLines",
            Self::BlankLineAfterOpeningBracket => "BlankLineAfterOpeningBracket",
            Self::BlankLineBeforeClosingBracket => "BlankLineBeforeClosingBracket",
            Self::BlankLineAfterSectionHeader => "BlankLineAfterSectionHeader",
            Self::MultipleSpaces => "MultipleSpaces",
            Self::SpaceBeforeComma => "SpaceBeforeComma",
            Self::SpaceBeforeSemicolon => "SpaceBeforeSemicolon",
            Self::SpaceAfterOpeningParen => "SpaceAfterOpeningParen",
            Self::SpaceBeforeClosingParen => "SpaceBeforeClosingParen",
            Self::MissingSpaceAfterComma => "MissingSpaceAfterComma",
            Self::MissingSpaceAfterSemicolon => "MissingSpaceAfterSemicolon",
            Self::MissingSpaceBeforeEquals => "MissingSpaceBeforeEquals",
            Self::MissingSpaceAfterEquals => "MissingSpaceAfterEquals",
            Self::MissingSpaceAfterCommentMarker => "MissingSpaceAfterCommentMarker",
            Self::MissingSpaceBeforeCommentMarker => "MissingSpaceBeforeCommentMarker",
            Self::UnclosedDirective => "UnclosedDirective",
            Self::UnreadableFile => "UnreadableFile",
        }
    }

    /// Look up a rule from a config key, matching its code or name case-insensitively.
    #[must_use]
    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| {
            rule.code().eq_ignore_ascii_case(key) || rule.name().eq_ignore_ascii_case(key)
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
