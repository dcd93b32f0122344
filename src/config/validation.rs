//! Suite definition semantic validation.
//!
//! Validates a parsed [`SuiteConfig`] and converts it into a runnable
//! [`Suite`]. Any violation here is a startup failure: nothing runs.

use std::path::{Component, Path, PathBuf};

use indexmap::IndexSet;

use crate::checker::{
    Check, CheckGroup, CheckKind, DEFAULT_DEPENDENCY_SECTIONS, GroupPolicy, MatchMode, Suite,
};
use crate::{ArtifactGuardError, Result};

use super::model::{CheckConfig, CheckKindConfig, GroupConfig, PolicyKind, SUITE_VERSION, SuiteConfig};

/// Validates semantic correctness of a suite definition.
///
/// # Errors
/// Returns an error if the version is unsupported, no groups are defined,
/// group names repeat, a group is empty or has an invalid policy, or a check
/// is misconfigured.
pub fn validate_suite_semantics(config: &SuiteConfig) -> Result<()> {
    validate_version(config)?;

    if config.groups.is_empty() {
        return Err(ArtifactGuardError::Config(
            "suite defines no groups; add at least one [[group]]".to_string(),
        ));
    }

    let mut seen = IndexSet::new();
    for (i, group) in config.groups.iter().enumerate() {
        if group.name.trim().is_empty() {
            return Err(ArtifactGuardError::Config(format!(
                "group[{i}].name must not be empty"
            )));
        }
        if !seen.insert(group.name.as_str()) {
            return Err(ArtifactGuardError::Config(format!(
                "duplicate group name '{}'",
                group.name
            )));
        }
        validate_group(group)?;
    }
    Ok(())
}

fn validate_version(config: &SuiteConfig) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == SUITE_VERSION => Ok(()),
        Some(v) => Err(ArtifactGuardError::Config(format!(
            "Unsupported suite version '{v}'. Only version '{SUITE_VERSION}' is supported."
        ))),
    }
}

fn validate_group(group: &GroupConfig) -> Result<()> {
    resolve_policy(group)?;

    if group.checks.is_empty() {
        return Err(ArtifactGuardError::Config(format!(
            "group '{}' has no checks",
            group.name
        )));
    }

    for (i, check) in group.checks.iter().enumerate() {
        validate_check(check).map_err(|reason| {
            ArtifactGuardError::Config(format!("group '{}' check[{i}]: {reason}", group.name))
        })?;
        if let (CheckKindConfig::Contains, Some(true), Some(pattern)) =
            (check.kind, check.regex, &check.pattern)
        {
            regex::Regex::new(pattern).map_err(|e| ArtifactGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }
    }
    Ok(())
}

fn resolve_policy(group: &GroupConfig) -> Result<GroupPolicy> {
    match (group.policy, group.min_ratio) {
        (PolicyKind::Strict, None) => Ok(GroupPolicy::Strict),
        (PolicyKind::Strict, Some(_)) => Err(ArtifactGuardError::Config(format!(
            "group '{}': min_ratio is only allowed with policy = \"threshold\"",
            group.name
        ))),
        (PolicyKind::Threshold, None) => Err(ArtifactGuardError::Config(format!(
            "group '{}': policy = \"threshold\" requires min_ratio",
            group.name
        ))),
        (PolicyKind::Threshold, Some(min_ratio)) => {
            let policy = GroupPolicy::Threshold { min_ratio };
            if policy.is_valid() {
                Ok(policy)
            } else {
                Err(ArtifactGuardError::Config(format!(
                    "group '{}': min_ratio must be in (0, 1], got {min_ratio}",
                    group.name
                )))
            }
        }
    }
}

fn validate_check(check: &CheckConfig) -> std::result::Result<(), String> {
    validate_target(&check.target)?;

    let kind = kind_name(check.kind);
    if check.expect.is_some() && check.kind != CheckKindConfig::Exists {
        return Err(format!("'expect' is not allowed on {kind} checks"));
    }
    if check.kind != CheckKindConfig::Contains
        && (check.case_sensitive.is_some() || check.regex.is_some())
    {
        return Err(format!(
            "'case_sensitive' and 'regex' are not allowed on {kind} checks"
        ));
    }
    if check.sections.is_some() && check.kind != CheckKindConfig::Dependency {
        return Err(format!("'sections' is not allowed on {kind} checks"));
    }

    match check.kind {
        CheckKindConfig::Exists if check.pattern.is_some() => {
            Err("'pattern' is not allowed on exists checks".to_string())
        }
        CheckKindConfig::Contains | CheckKindConfig::Dependency
            if check.pattern.as_deref().is_none_or(str::is_empty) =>
        {
            Err(format!("{kind} checks require a non-empty 'pattern'"))
        }
        CheckKindConfig::Dependency
            if check.sections.as_ref().is_some_and(Vec::is_empty) =>
        {
            Err("'sections' must not be empty".to_string())
        }
        _ => Ok(()),
    }
}

fn validate_target(target: &str) -> std::result::Result<(), String> {
    if target.trim().is_empty() {
        return Err("'target' must not be empty".to_string());
    }
    let path = Path::new(target);
    if path.is_absolute() || path.has_root() {
        return Err(format!(
            "target '{target}' must be relative to the project root"
        ));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(format!("target '{target}' must not leave the project root"));
    }
    Ok(())
}

const fn kind_name(kind: CheckKindConfig) -> &'static str {
    match kind {
        CheckKindConfig::Exists => "exists",
        CheckKindConfig::Contains => "contains",
        CheckKindConfig::Dependency => "dependency",
    }
}

impl SuiteConfig {
    /// Validate and convert into a runnable suite.
    ///
    /// # Errors
    /// Returns the first semantic violation found by [`validate_suite_semantics`].
    pub fn into_suite(self) -> Result<Suite> {
        validate_suite_semantics(&self)?;

        let groups = self
            .groups
            .into_iter()
            .map(|group| {
                let policy = resolve_policy(&group)?;
                let checks = group.checks.into_iter().map(into_check).collect();
                Ok(CheckGroup {
                    name: group.name,
                    policy,
                    checks,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Suite {
            name: self.name,
            groups,
        })
    }
}

fn into_check(config: CheckConfig) -> Check {
    let target = PathBuf::from(&config.target);
    let pattern = config.pattern.unwrap_or_default();
    let check = match config.kind {
        CheckKindConfig::Exists => Check::exists(target, config.expect.unwrap_or_default()),
        CheckKindConfig::Contains => Check::new(
            format!("{} contains \"{pattern}\"", config.target),
            target,
            CheckKind::ContentMatch {
                pattern,
                case_sensitive: config.case_sensitive.unwrap_or(true),
                mode: if config.regex.unwrap_or(false) {
                    MatchMode::Regex
                } else {
                    MatchMode::Substring
                },
            },
        ),
        CheckKindConfig::Dependency => {
            let sections = config.sections.unwrap_or_else(|| {
                DEFAULT_DEPENDENCY_SECTIONS
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            });
            Check::new(
                format!("{} declares {pattern}", config.target),
                target,
                CheckKind::Dependency {
                    package: pattern,
                    sections,
                },
            )
        }
    };

    match config.name {
        Some(name) => check.named(name),
        None => check,
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
