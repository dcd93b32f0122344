use std::fs;

use tempfile::TempDir;

use super::mock_fs::MockFileSystem;
use super::*;

#[test]
fn real_entry_kind_distinguishes_files_and_dirs() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("lib")).unwrap();
    fs::write(temp_dir.path().join("todo.md"), "- [ ] ship").unwrap();

    let fs = RealFileSystem;
    assert_eq!(
        fs.entry_kind(&temp_dir.path().join("lib")).unwrap(),
        Some(EntryKind::Directory)
    );
    assert_eq!(
        fs.entry_kind(&temp_dir.path().join("todo.md")).unwrap(),
        Some(EntryKind::File)
    );
}

#[test]
fn real_entry_kind_missing_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let fs = RealFileSystem;

    assert_eq!(fs.entry_kind(&temp_dir.path().join("nope")).unwrap(), None);
}

#[test]
fn real_entry_kind_below_a_file_is_none() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("file.txt"), "x").unwrap();

    let fs = RealFileSystem;
    assert_eq!(
        fs.entry_kind(&temp_dir.path().join("file.txt").join("child")).unwrap(),
        None
    );
}

#[test]
fn real_read_to_string_rejects_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blob.bin");
    fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    let err = RealFileSystem.read_to_string(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn mock_files_imply_parent_directories() {
    let fs = MockFileSystem::new().with_file("/project/app/api/route.ts", "export {}");

    assert_eq!(
        fs.entry_kind(Path::new("/project/app/api")).unwrap(),
        Some(EntryKind::Directory)
    );
    assert_eq!(fs.entry_kind(Path::new("/project/lib")).unwrap(), None);
}

#[test]
fn mock_failure_surfaces_as_error() {
    let fs = MockFileSystem::new()
        .with_file("/project/secret.txt", "x")
        .with_failure("/project/secret.txt", std::io::ErrorKind::PermissionDenied);

    let err = fs.read_to_string(Path::new("/project/secret.txt")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
    assert!(fs.entry_kind(Path::new("/project/secret.txt")).is_err());
}
