use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "codedust")]
#[command(author, version, about = "CodeDust - code hygiene inspector")]
#[command(long_about = "Inspects source files for whitespace, indentation, blank-line, \
    spacing and comment hygiene issues.\n\n\
    Exit codes:\n  \
    0 - No issues found\n  \
    1 - Issues found\n  \
    2 - Usage, configuration or path error")]
pub struct Cli {
    /// File extension to inspect (e.g. -e py -e js, or -e py,js)
    #[arg(
        short,
        long = "extension",
        value_name = "EXT",
        required = true,
        value_delimiter = ','
    )]
    pub extensions: Vec<String>,

    /// Directory or file to inspect (can be repeated)
    #[arg(short, long = "path", value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Pattern for excluding file paths: plain text is a substring, anything
    /// with regex metacharacters is a regex (can be repeated)
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Path to an INI configuration file
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
