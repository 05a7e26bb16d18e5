use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeDustError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file {path} (line {line}): {message}")]
    ConfigSyntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Invalid ignore pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Failed to read path: {}", path.display())]
    PathRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodeDustError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
