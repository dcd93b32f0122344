use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::checker::{CheckStatus, Classification, GroupResult, RunReport};
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    timestamp: &'a DateTime<Local>,
    root: &'a Path,
    suite: Option<&'a str>,
    summary: Summary,
    groups: &'a [GroupResult],
}

#[derive(Serialize)]
struct Summary {
    groups: usize,
    groups_passed: usize,
    checks: usize,
    passed: usize,
    failed: usize,
    errors: usize,
    overall_score: f64,
    classification: Classification,
    exit_success: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let count = |status: CheckStatus| -> usize {
            report.group_results.iter().map(|g| g.count(status)).sum()
        };

        let output = JsonOutput {
            timestamp: &report.timestamp,
            root: &report.root,
            suite: report.suite_name.as_deref(),
            summary: Summary {
                groups: report.group_results.len(),
                groups_passed: report.groups_passed(),
                checks: report.check_count(),
                passed: count(CheckStatus::Pass),
                failed: count(CheckStatus::Fail),
                errors: count(CheckStatus::Error),
                overall_score: report.overall_score,
                classification: report.classification,
                exit_success: report.exit_success,
            },
            groups: &report.group_results,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
