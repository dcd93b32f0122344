//! Group-level scoring and the final run report.
//!
//! The overall score is the share of groups that passed, scaled to 0-100.
//! A threshold group that barely meets its ratio counts as one full pass.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::group::GroupResult;

/// Minimum score classified as [`Classification::Excellent`].
pub const EXCELLENT_MIN_SCORE: f64 = 90.0;
/// Minimum score classified as [`Classification::Good`].
pub const GOOD_MIN_SCORE: f64 = 75.0;
/// Minimum score classified as [`Classification::Warning`].
pub const WARNING_MIN_SCORE: f64 = 50.0;
/// Minimum score for a successful run (exit code 0).
pub const SUCCESS_MIN_SCORE: f64 = GOOD_MIN_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl Classification {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_MIN_SCORE {
            Self::Excellent
        } else if score >= GOOD_MIN_SCORE {
            Self::Good
        } else if score >= WARNING_MIN_SCORE {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "all expected artifacts are in place",
            Self::Good => "functional, minor gaps remain",
            Self::Warning => "needs fixes before release",
            Self::Critical => "needs a full review",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of passed groups. Zero when no group ran.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Group counts are tiny
pub fn overall_score(results: &[GroupResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    passed as f64 / results.len() as f64 * 100.0
}

#[must_use]
pub fn is_success(score: f64) -> bool {
    score >= SUCCESS_MIN_SCORE
}

/// Complete record of one harness invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub timestamp: DateTime<Local>,
    pub root: PathBuf,
    pub suite_name: Option<String>,
    pub group_results: Vec<GroupResult>,
    pub overall_score: f64,
    pub classification: Classification,
    pub exit_success: bool,
}

impl RunReport {
    #[must_use]
    pub fn new(
        timestamp: DateTime<Local>,
        root: PathBuf,
        suite_name: Option<String>,
        group_results: Vec<GroupResult>,
    ) -> Self {
        let overall_score = overall_score(&group_results);
        Self {
            timestamp,
            root,
            suite_name,
            group_results,
            overall_score,
            classification: Classification::from_score(overall_score),
            exit_success: is_success(overall_score),
        }
    }

    #[must_use]
    pub fn groups_passed(&self) -> usize {
        self.group_results.iter().filter(|r| r.passed).count()
    }

    #[must_use]
    pub fn check_count(&self) -> usize {
        self.group_results.iter().map(|g| g.results.len()).sum()
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
