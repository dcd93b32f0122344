use std::path::PathBuf;

use super::*;
use crate::filesystem::mock_fs::MockFileSystem;
use crate::output::MemoryConsole;

const SUITE: &str = r#"
name = "Release"

[[group]]
name = "Docs"

[[group.check]]
kind = "exists"
target = "README.md"
expect = "file"

[[group.check]]
kind = "contains"
target = "README.md"
pattern = "install"
case_sensitive = false

[[group]]
name = "Deps"
policy = "threshold"
min_ratio = 0.5

[[group.check]]
kind = "dependency"
target = "package.json"
pattern = "express"
"#;

fn fs_with_suite(content: &str) -> MockFileSystem {
    MockFileSystem::new().with_file("/project/.artifact-guard.toml", content)
}

#[test]
fn validate_reports_counts() {
    let fs = fs_with_suite(SUITE);
    let console = MemoryConsole::new();
    let action = SuiteAction::Validate {
        path: PathBuf::from(".artifact-guard.toml"),
    };

    run_suite_impl(&action, &fs, &console).unwrap();

    assert_eq!(
        console.messages_at(Level::Info),
        vec!["Suite definition is valid: 2 groups, 3 checks".to_string()]
    );
}

#[test]
fn validate_rejects_invalid_definition() {
    let fs = fs_with_suite(
        r#"
[[group]]
name = "Empty"
"#,
    );
    let action = SuiteAction::Validate {
        path: PathBuf::from("/project/.artifact-guard.toml"),
    };

    let err = run_suite_impl(&action, &fs, &MemoryConsole::new()).unwrap_err();
    assert!(err.to_string().contains("has no checks"));
}

#[test]
fn validate_missing_file_is_an_error() {
    let fs = MockFileSystem::new();
    let action = SuiteAction::Validate {
        path: PathBuf::from("missing.toml"),
    };
    assert!(run_suite_impl(&action, &fs, &MemoryConsole::new()).is_err());
}

#[test]
fn show_text_lists_groups_and_checks() {
    let fs = fs_with_suite(SUITE);
    let console = MemoryConsole::new();
    let action = SuiteAction::Show {
        path: PathBuf::from(".artifact-guard.toml"),
        format: OutputFormat::Text,
    };

    run_suite_impl(&action, &fs, &console).unwrap();

    let output = &console.messages_at(Level::Info)[0];
    assert!(output.contains("Suite: Release"));
    assert!(output.contains("Docs [strict]"));
    assert!(output.contains("Deps [threshold 50%]"));
    assert!(output.contains("file README.md"));
    assert!(output.contains("substring, ignore case"));
    assert!(output.contains("in dependencies, devDependencies"));
}

#[test]
fn show_json_is_parseable() {
    let fs = fs_with_suite(SUITE);
    let console = MemoryConsole::new();
    let action = SuiteAction::Show {
        path: PathBuf::from(".artifact-guard.toml"),
        format: OutputFormat::Json,
    };

    run_suite_impl(&action, &fs, &console).unwrap();

    let output = &console.messages_at(Level::Info)[0];
    let value: serde_json::Value = serde_json::from_str(output).unwrap();
    assert_eq!(value["name"], "Release");
    assert_eq!(value["groups"][0]["policy"], "strict");
    assert_eq!(value["groups"][1]["min_ratio"], 0.5);
    assert_eq!(value["groups"][0]["checks"][1]["kind"], "content_match");
    assert_eq!(value["groups"][0]["checks"][1]["case_sensitive"], false);
}

#[test]
fn format_suite_text_without_name() {
    let suite = Suite::new(vec![]);
    let output = format_suite_text(&suite);
    assert!(!output.contains("Suite:"));
    assert!(output.starts_with("0 groups, 0 checks"));
}
