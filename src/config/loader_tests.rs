use super::*;
use crate::filesystem::mock_fs::MockFileSystem;

const SUITE: &str = r#"
version = "1"

[[group]]
name = "Docs"

[[group.check]]
kind = "exists"
target = "README.md"
"#;

#[test]
fn load_reads_suite_from_root() {
    let fs = MockFileSystem::new().with_file("/project/.artifact-guard.toml", SUITE);
    let loader = FileSuiteLoader::with_fs(fs);

    let loaded = loader.load(Path::new("/project")).unwrap();

    assert_eq!(loaded.path, PathBuf::from("/project/.artifact-guard.toml"));
    assert_eq!(loaded.config.groups.len(), 1);
    assert_eq!(loaded.config.groups[0].name, "Docs");
}

#[test]
fn load_missing_suite_is_config_error() {
    let loader = FileSuiteLoader::with_fs(MockFileSystem::new());

    let err = loader.load(Path::new("/project")).unwrap_err();

    assert!(matches!(err, ArtifactGuardError::Config(_)));
    assert!(err.to_string().contains("artifact-guard init"));
}

#[test]
fn load_unreadable_suite_reports_io_error() {
    let fs = MockFileSystem::new()
        .with_dir("/project")
        .with_failure("/project/.artifact-guard.toml", std::io::ErrorKind::PermissionDenied);
    let loader = FileSuiteLoader::with_fs(fs);

    let err = loader.load(Path::new("/project")).unwrap_err();

    assert!(matches!(err, ArtifactGuardError::FileRead { .. }));
    assert!(!err.to_string().contains("No suite definition found"));
}

#[test]
fn load_from_relative_path_uses_current_dir() {
    let fs = MockFileSystem::new().with_file("/project/suites/release.toml", SUITE);
    let loader = FileSuiteLoader::with_fs(fs);

    let loaded = loader.load_from_path(Path::new("suites/release.toml")).unwrap();

    assert_eq!(loaded.path, PathBuf::from("/project/suites/release.toml"));
}

#[test]
fn load_from_missing_path_is_file_read_error() {
    let loader = FileSuiteLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();

    assert!(matches!(err, ArtifactGuardError::FileRead { .. }));
}

#[test]
fn load_invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.artifact-guard.toml", "[[group]\nname=");
    let loader = FileSuiteLoader::with_fs(fs);

    let err = loader.load(Path::new("/project")).unwrap_err();

    assert!(matches!(err, ArtifactGuardError::TomlParse(_)));
}

#[test]
fn loading_does_not_validate_semantics() {
    let fs = MockFileSystem::new().with_file("/project/.artifact-guard.toml", "version = \"9\"");
    let loader = FileSuiteLoader::with_fs(fs);

    let loaded = loader.load(Path::new("/project")).unwrap();

    assert!(loaded.config.into_suite().is_err());
}
