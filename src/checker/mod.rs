mod check;
mod executor;
mod group;
mod result;
mod runner;
mod score;

pub use check::{Check, CheckKind, DEFAULT_DEPENDENCY_SECTIONS, MatchMode, TargetType};
pub use executor::CheckExecutor;
pub use group::{CheckGroup, GroupEvaluator, GroupFault, GroupPolicy, GroupResult, pass_ratio};
pub use result::{CheckResult, CheckStatus};
pub use runner::{Suite, SuiteRunner};
pub use score::{
    Classification, EXCELLENT_MIN_SCORE, GOOD_MIN_SCORE, RunReport, SUCCESS_MIN_SCORE,
    WARNING_MIN_SCORE, is_success, overall_score,
};
