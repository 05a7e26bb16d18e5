#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the codedust binary.
#[macro_export]
macro_rules! codedust {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("codedust"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes, for binary or non-UTF-8 fixtures.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a fixture file.
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Writes `.codedust.ini` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".codedust.ini", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Python source that passes every rule with the built-in defaults.
pub const CLEAN_PY: &str = "def main():\n    value = compute(1, 2)\n    return value\n";

/// Python source with one trailing-whitespace line and one excess blank line.
pub const DIRTY_PY: &str = "x = 1 \n\n\ny = 2\n";

/// Two-space indented JavaScript.
pub const TWO_SPACE_JS: &str = "if (ready) {\n  start();\n}\n";

/// Per-extension override of the indent size.
pub const JS_INDENT_CONFIG: &str = "[default]\nindent_size = 4\n\n[js]\nindent_size = 2\n";
