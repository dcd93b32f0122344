use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::filesystem::EntryKind;

/// Manifest sections searched by a dependency check when none are declared.
pub const DEFAULT_DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

/// Entry type an existence check expects at its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    File,
    #[serde(rename = "dir", alias = "directory")]
    Directory,
    #[default]
    Any,
}

impl TargetType {
    #[must_use]
    pub const fn accepts(self, kind: EntryKind) -> bool {
        matches!(
            (self, kind),
            (Self::Any, _)
                | (Self::File, EntryKind::File)
                | (Self::Directory, EntryKind::Directory)
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Any => "path",
        }
    }
}

/// How a content pattern is compared against file text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Substring,
    Regex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    /// The target path exists with the expected entry type.
    Existence { expect: TargetType },
    /// The target file's text contains `pattern`.
    ContentMatch {
        pattern: String,
        case_sensitive: bool,
        mode: MatchMode,
    },
    /// The target JSON manifest declares `package` in one of `sections`.
    Dependency {
        package: String,
        sections: Vec<String>,
    },
}

impl CheckKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Existence { .. } => "exists",
            Self::ContentMatch { .. } => "contains",
            Self::Dependency { .. } => "dependency",
        }
    }
}

/// A single atomic assertion against the project tree.
///
/// `target` is relative to the project root handed to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,
    pub target: PathBuf,
    #[serde(flatten)]
    pub kind: CheckKind,
}

impl Check {
    #[must_use]
    pub fn new(name: impl Into<String>, target: impl Into<PathBuf>, kind: CheckKind) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            kind,
        }
    }

    #[must_use]
    pub fn exists(target: impl Into<PathBuf>, expect: TargetType) -> Self {
        let target = target.into();
        let name = format!("{} {}", expect.as_str(), target.display());
        Self::new(name, target, CheckKind::Existence { expect })
    }

    #[must_use]
    pub fn contains(target: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        let target = target.into();
        let pattern = pattern.into();
        let name = format!("{} contains \"{pattern}\"", target.display());
        Self::new(
            name,
            target,
            CheckKind::ContentMatch {
                pattern,
                case_sensitive: true,
                mode: MatchMode::Substring,
            },
        )
    }

    #[must_use]
    pub fn dependency(target: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        let target = target.into();
        let package = package.into();
        let name = format!("{} declares {package}", target.display());
        Self::new(
            name,
            target,
            CheckKind::Dependency {
                package,
                sections: DEFAULT_DEPENDENCY_SECTIONS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
        )
    }

    /// Make a content check case-insensitive. No effect on other kinds.
    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        if let CheckKind::ContentMatch { case_sensitive, .. } = &mut self.kind {
            *case_sensitive = false;
        }
        self
    }

    /// Treat a content check's pattern as a regular expression.
    #[must_use]
    pub fn regex(mut self) -> Self {
        if let CheckKind::ContentMatch { mode, .. } = &mut self.kind {
            *mode = MatchMode::Regex;
        }
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Stand-in check recorded when a whole group could not be evaluated.
    #[must_use]
    pub fn placeholder(group: &str) -> Self {
        Self::new(
            format!("evaluate group '{group}'"),
            PathBuf::new(),
            CheckKind::Existence {
                expect: TargetType::Any,
            },
        )
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
