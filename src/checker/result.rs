use serde::Serialize;

use super::check::Check;

/// Terminal state of a single check.
///
/// `Error` means the assertion could not be evaluated at all. It counts as
/// not-passed for scoring but is reported separately from `Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Error,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        }
    }
}

/// Outcome of executing one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub check: Check,
    pub status: CheckStatus,
    pub detail: String,
}

impl CheckResult {
    #[must_use]
    pub fn pass(check: Check, detail: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Pass,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn fail(check: Check, detail: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn error(check: Check, detail: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Error,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Pass)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Fail)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.status, CheckStatus::Error)
    }
}
