use std::path::{Path, PathBuf};

use crate::error::{ArtifactGuardError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::model::SuiteConfig;

/// Default suite definition file name, looked up in the project root.
pub const SUITE_FILE_NAME: &str = ".artifact-guard.toml";

/// A parsed suite definition together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: SuiteConfig,
    pub path: PathBuf,
}

/// Trait for loading suite definitions from various sources.
pub trait SuiteLoader {
    /// Load `.artifact-guard.toml` from the project root.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or not valid TOML.
    fn load(&self, root: &Path) -> Result<LoadResult>;

    /// Load a suite definition from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or not valid TOML.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads suite definitions from the filesystem.
#[derive(Debug)]
pub struct FileSuiteLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileSuiteLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileSuiteLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FileSuiteLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn read_suite(&self, path: &Path) -> Result<SuiteConfig> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| ArtifactGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        Ok(toml::from_str(&content)?)
    }
}

impl<F: FileSystem> SuiteLoader for FileSuiteLoader<F> {
    fn load(&self, root: &Path) -> Result<LoadResult> {
        let path = root.join(SUITE_FILE_NAME);
        match self.fs.entry_kind(&path) {
            Ok(Some(_)) => self.load_from_path(&path),
            Ok(None) => Err(ArtifactGuardError::Config(format!(
                "No suite definition found at {}. Run `artifact-guard init` or pass --suite.",
                path.display()
            ))),
            Err(source) => Err(ArtifactGuardError::FileRead { path, source }),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let path = if path.is_relative() {
            self.fs.current_dir()?.join(path)
        } else {
            path.to_path_buf()
        };
        tracing::debug!(path = %path.display(), "loading suite definition");
        let config = self.read_suite(&path)?;
        Ok(LoadResult { config, path })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
