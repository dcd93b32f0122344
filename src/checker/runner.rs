use std::path::Path;

use serde::Serialize;

use crate::filesystem::FileSystem;

use super::executor::{CheckExecutor, catch_quietly, panic_message};
use super::group::{CheckGroup, GroupEvaluator, GroupResult};

/// An ordered collection of groups, as loaded from a suite definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Suite {
    pub name: Option<String>,
    pub groups: Vec<CheckGroup>,
}

impl Suite {
    #[must_use]
    pub fn new(groups: Vec<CheckGroup>) -> Self {
        Self { name: None, groups }
    }

    #[must_use]
    pub fn check_count(&self) -> usize {
        self.groups.iter().map(|g| g.checks.len()).sum()
    }

    /// Keep only the named groups, preserving suite order.
    #[must_use]
    pub fn retain_groups(mut self, names: &[String]) -> Self {
        self.groups.retain(|g| names.iter().any(|n| n == &g.name));
        self
    }
}

/// Evaluates every group of a suite against one project root.
///
/// A group that faults (or panics) is recorded as a failed group and the
/// remaining groups still run.
pub struct SuiteRunner<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    root: &'a Path,
}

impl<'a, F: FileSystem + ?Sized> SuiteRunner<'a, F> {
    #[must_use]
    pub const fn new(fs: &'a F, root: &'a Path) -> Self {
        Self { fs, root }
    }

    #[must_use]
    pub fn run(&self, suite: &Suite) -> Vec<GroupResult> {
        suite
            .groups
            .iter()
            .map(|group| self.run_group(group))
            .collect()
    }

    fn run_group(&self, group: &CheckGroup) -> GroupResult {
        tracing::debug!(group = %group.name, checks = group.checks.len(), "evaluating group");

        let evaluator = GroupEvaluator::new(CheckExecutor::new(self.fs, self.root));
        let outcome = catch_quietly(|| evaluator.evaluate(group));

        let result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(fault)) => {
                tracing::warn!(group = %group.name, %fault, "group could not be evaluated");
                GroupResult::faulted(group, format!("group fault: {fault}"))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(group = %group.name, %message, "group evaluation panicked");
                GroupResult::faulted(group, format!("group evaluation panicked: {message}"))
            }
        };

        tracing::info!(
            group = %result.name,
            passed = result.passed,
            ratio = result.pass_ratio,
            "group evaluated"
        );
        result
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
