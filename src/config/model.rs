use serde::{Deserialize, Serialize};

use crate::checker::TargetType;

/// Supported suite definition version.
pub const SUITE_VERSION: &str = "1";

/// Raw suite definition as written in `.artifact-guard.toml`.
///
/// Converted into a [`crate::checker::Suite`] by
/// [`SuiteConfig::into_suite`](crate::config::SuiteConfig::into_suite) after
/// semantic validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Definition version. Only "1" is supported.
    #[serde(default)]
    pub version: Option<String>,

    /// Optional display name shown in report headers.
    #[serde(default)]
    pub name: Option<String>,

    /// Groups [[group]], evaluated in declaration order.
    #[serde(default, rename = "group")]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Strict,
    Threshold,
}

/// One group [[group]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,

    /// Pass policy (default: strict).
    #[serde(default)]
    pub policy: PolicyKind,

    /// Minimum pass ratio in (0, 1]. Required for threshold groups.
    #[serde(default)]
    pub min_ratio: Option<f64>,

    /// Checks [[group.check]].
    #[serde(default, rename = "check")]
    pub checks: Vec<CheckConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckKindConfig {
    Exists,
    Contains,
    Dependency,
}

/// One check [[group.check]]. Kind-specific keys are validated after parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Label shown in reports. Derived from kind and target when omitted.
    #[serde(default)]
    pub name: Option<String>,

    pub kind: CheckKindConfig,

    /// Path relative to the project root.
    pub target: String,

    /// `exists` only: expected entry type (default: any).
    #[serde(default)]
    pub expect: Option<TargetType>,

    /// `contains`: the marker. `dependency`: the package name.
    #[serde(default)]
    pub pattern: Option<String>,

    /// `contains` only (default: true).
    #[serde(default)]
    pub case_sensitive: Option<bool>,

    /// `contains` only: treat `pattern` as a regular expression (default: false).
    #[serde(default)]
    pub regex: Option<bool>,

    /// `dependency` only: manifest sections to search.
    #[serde(default)]
    pub sections: Option<Vec<String>>,
}
