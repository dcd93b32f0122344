use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::filesystem::FileSystem;

use super::check::Check;
use super::executor::CheckExecutor;
use super::result::{CheckResult, CheckStatus};

/// Pass policy shared by every check in a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum GroupPolicy {
    /// Every check must pass.
    Strict,
    /// `passed / total >= min_ratio`, with `min_ratio` in `(0, 1]`.
    Threshold { min_ratio: f64 },
}

impl GroupPolicy {
    /// Whether `min_ratio` lies in `(0, 1]`. Strict is always valid.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::Strict => true,
            Self::Threshold { min_ratio } => min_ratio > 0.0 && min_ratio <= 1.0,
        }
    }

    #[must_use]
    pub fn is_satisfied(self, results: &[CheckResult]) -> bool {
        match self {
            Self::Strict => results.iter().all(CheckResult::is_passed),
            Self::Threshold { min_ratio } => pass_ratio(results) >= min_ratio,
        }
    }
}

impl fmt::Display for GroupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Threshold { min_ratio } => write!(f, "threshold {:.0}%", min_ratio * 100.0),
        }
    }
}

/// A named, ordered set of checks evaluated under one policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckGroup {
    pub name: String,
    #[serde(flatten)]
    pub policy: GroupPolicy,
    pub checks: Vec<Check>,
}

impl CheckGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, policy: GroupPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }
}

/// Outcome of evaluating one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupResult {
    pub name: String,
    #[serde(flatten)]
    pub policy: GroupPolicy,
    pub results: Vec<CheckResult>,
    pub passed: bool,
    pub pass_ratio: f64,
}

impl GroupResult {
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    #[must_use]
    pub fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Failed result for a group whose evaluation faulted as a whole.
    #[must_use]
    pub fn faulted(group: &CheckGroup, detail: impl Into<String>) -> Self {
        Self {
            name: group.name.clone(),
            policy: group.policy,
            results: vec![CheckResult::error(Check::placeholder(&group.name), detail)],
            passed: false,
            pass_ratio: 0.0,
        }
    }
}

/// Reasons a group cannot be evaluated at all.
#[derive(Debug, Error, PartialEq)]
pub enum GroupFault {
    #[error("group has no checks")]
    Empty,

    #[error("threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),
}

/// `passed / total`, counting only `Pass`. Zero for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Check counts are tiny
pub fn pass_ratio(results: &[CheckResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.is_passed()).count();
    passed as f64 / results.len() as f64
}

/// Runs every check of a group and applies its policy.
pub struct GroupEvaluator<'a, F: FileSystem + ?Sized> {
    executor: CheckExecutor<'a, F>,
}

impl<'a, F: FileSystem + ?Sized> GroupEvaluator<'a, F> {
    #[must_use]
    pub const fn new(executor: CheckExecutor<'a, F>) -> Self {
        Self { executor }
    }

    /// Evaluate all checks in declared order. A check error never stops the
    /// remaining checks.
    ///
    /// # Errors
    /// Returns a fault if the group is empty or its threshold is out of range.
    pub fn evaluate(&self, group: &CheckGroup) -> Result<GroupResult, GroupFault> {
        if let GroupPolicy::Threshold { min_ratio } = group.policy
            && !group.policy.is_valid()
        {
            return Err(GroupFault::InvalidThreshold(min_ratio));
        }
        if group.checks.is_empty() {
            return Err(GroupFault::Empty);
        }

        let results: Vec<_> = group
            .checks
            .iter()
            .map(|check| self.executor.execute(check))
            .collect();

        let passed = group.policy.is_satisfied(&results);
        let pass_ratio = pass_ratio(&results);

        Ok(GroupResult {
            name: group.name.clone(),
            policy: group.policy,
            results,
            passed,
            pass_ratio,
        })
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
