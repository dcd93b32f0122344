use std::collections::{HashMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::filesystem::{EntryKind, FileSystem};

/// In-memory tree. Parent directories of every file exist implicitly.
pub struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    failures: HashMap<PathBuf, ErrorKind>,
    panics: HashSet<PathBuf>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            dirs: HashSet::new(),
            failures: HashMap::new(),
            panics: HashSet::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = normalize_path(&path.into());
        let mut parent = path.parent();
        while let Some(dir) = parent {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            parent = dir.parent();
        }
        self.files.insert(path, content.to_string());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        let mut current = Some(path.as_path());
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        self
    }

    /// Every access to `path` fails with `kind`.
    pub fn with_failure(mut self, path: impl Into<PathBuf>, kind: ErrorKind) -> Self {
        self.failures.insert(normalize_path(&path.into()), kind);
        self
    }

    /// Every access to `path` panics.
    pub fn with_panic(mut self, path: impl Into<PathBuf>) -> Self {
        self.panics.insert(normalize_path(&path.into()));
        self
    }

    fn guard(&self, path: &Path) -> std::io::Result<PathBuf> {
        let normalized = normalize_path(path);
        assert!(
            !self.panics.contains(&normalized),
            "simulated fault at {}",
            normalized.display()
        );
        if let Some(kind) = self.failures.get(&normalized) {
            return Err(Error::new(*kind, "simulated failure"));
        }
        Ok(normalized)
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let normalized = self.guard(path)?;
        if self.dirs.contains(&normalized) {
            return Err(Error::new(ErrorKind::IsADirectory, "is a directory"));
        }
        self.files
            .get(&normalized)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn entry_kind(&self, path: &Path) -> std::io::Result<Option<EntryKind>> {
        let normalized = self.guard(path)?;
        if self.files.contains_key(&normalized) {
            Ok(Some(EntryKind::File))
        } else if self.dirs.contains(&normalized) {
            Ok(Some(EntryKind::Directory))
        } else {
            Ok(None)
        }
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        let absolute = if path.is_relative() {
            self.current_dir.join(path)
        } else {
            path.to_path_buf()
        };
        match self.entry_kind(&absolute)? {
            Some(_) => Ok(normalize_path(&absolute)),
            None => Err(Error::new(ErrorKind::NotFound, "file not found")),
        }
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    let normalized = if path_str.starts_with('/') {
        format!("/{}", components.join("/"))
    } else {
        components.join("/")
    };
    PathBuf::from(normalized)
}
