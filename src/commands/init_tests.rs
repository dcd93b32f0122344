use tempfile::TempDir;

use super::{generate_suite_template, run_init_impl};
use crate::cli::InitArgs;
use crate::config::SuiteConfig;
use crate::output::{Level, MemoryConsole};

#[test]
fn template_is_a_valid_suite() {
    let config: SuiteConfig = toml::from_str(&generate_suite_template()).unwrap();
    let suite = config.into_suite().unwrap();
    assert_eq!(suite.name.as_deref(), Some("Project artifacts"));
    assert_eq!(suite.groups.len(), 2);
    assert_eq!(suite.check_count(), 4);
}

#[test]
fn template_shows_both_policies() {
    let template = generate_suite_template();
    assert!(template.contains(r#"policy = "strict""#));
    assert!(template.contains(r#"policy = "threshold""#));
    assert!(template.contains("min_ratio = 0.5"));
}

#[test]
fn init_creates_suite_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".artifact-guard.toml");
    let console = MemoryConsole::new();

    let args = InitArgs {
        output: path.clone(),
        force: false,
    };
    run_init_impl(&args, &console).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[[group]]"));
    let info = console.messages_at(Level::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].starts_with("Created suite definition:"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".artifact-guard.toml");
    std::fs::write(&path, "# existing").unwrap();

    let args = InitArgs {
        output: path.clone(),
        force: false,
    };
    let err = run_init_impl(&args, &MemoryConsole::new()).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing");
}

#[test]
fn init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".artifact-guard.toml");
    std::fs::write(&path, "# existing").unwrap();

    let args = InitArgs {
        output: path.clone(),
        force: true,
    };
    run_init_impl(&args, &MemoryConsole::new()).unwrap();

    assert!(std::fs::read_to_string(&path).unwrap().contains("version = \"1\""));
}

#[test]
fn init_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let args = InitArgs {
        output: temp_dir.path().join("missing").join("suite.toml"),
        force: false,
    };
    assert!(run_init_impl(&args, &MemoryConsole::new()).is_err());
}
