#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the artifact-guard binary.
#[macro_export]
macro_rules! artifact_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("artifact-guard"))
    };
}

/// Two groups: a strict docs group and a 50% layout group.
pub const BASIC_SUITE: &str = r#"
version = "1"
name = "Fixture"

[[group]]
name = "Docs"

[[group.check]]
kind = "exists"
target = "README.md"
expect = "file"

[[group.check]]
kind = "contains"
target = "README.md"
pattern = "usage"
case_sensitive = false

[[group]]
name = "Layout"
policy = "threshold"
min_ratio = 0.5

[[group.check]]
kind = "exists"
target = "src"
expect = "dir"

[[group.check]]
kind = "exists"
target = "tests"
expect = "dir"
"#;

/// Creates a temporary project tree for integration tests.
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

    /// A tree that satisfies [`BASIC_SUITE`] completely.
    pub fn complete() -> Self {
        let fixture = Self::new();
        fixture.create_suite(BASIC_SUITE);
        fixture.create_file("README.md", "# Fixture\n\n## Usage\n\nRun it.\n");
        fixture.create_dir("src");
        fixture.create_dir("tests");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.artifact-guard.toml` in the fixture root.
    pub fn create_suite(&self, content: &str) {
        self.create_file(".artifact-guard.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
