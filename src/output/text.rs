use std::fmt::Write;

use crate::checker::{CheckResult, CheckStatus, Classification, GroupResult, RunReport};
use crate::error::Result;

use super::ansi::{self, paint};
use super::{ColorMode, ReportFormatter};

const RULE: &str = "============================================================";

/// Human-readable report: every group, every check with its detail, then the
/// score and verdict.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.should_use_colors(),
        }
    }

    /// Uncolored rendering, used for the persisted report.
    #[must_use]
    pub const fn plain() -> Self {
        Self { use_colors: false }
    }

    const fn status_icon(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
            CheckStatus::Error => "!",
        }
    }

    const fn status_color(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Pass => ansi::GREEN,
            CheckStatus::Fail => ansi::RED,
            CheckStatus::Error => ansi::YELLOW,
        }
    }

    const fn classification_color(classification: Classification) -> &'static str {
        match classification {
            Classification::Excellent => ansi::GREEN,
            Classification::Good => ansi::CYAN,
            Classification::Warning => ansi::YELLOW,
            Classification::Critical => ansi::RED,
        }
    }

    fn format_header(report: &RunReport, output: &mut String) {
        let _ = writeln!(
            output,
            "artifact-guard report - {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
        if let Some(name) = &report.suite_name {
            let _ = writeln!(output, "Suite: {name}");
        }
        let _ = writeln!(output, "Root: {}", report.root.display());
        let _ = writeln!(output, "{RULE}");
    }

    fn format_group(&self, group: &GroupResult, output: &mut String) {
        let (icon, label, color) = if group.passed {
            ("✓", "PASSED", ansi::GREEN)
        } else {
            ("✗", "FAILED", ansi::RED)
        };
        let _ = writeln!(
            output,
            "{icon} {} [{}] {}/{} ({:.1}%) {}",
            group.name,
            group.policy,
            group.passed_count(),
            group.results.len(),
            group.pass_ratio * 100.0,
            paint(self.use_colors, color, label)
        );
        for result in &group.results {
            self.format_check(result, output);
        }
    }

    fn format_check(&self, result: &CheckResult, output: &mut String) {
        let status = result.status;
        let label = format!("{:<5}", status.as_str());
        let _ = writeln!(
            output,
            "   {} {} {}",
            Self::status_icon(status),
            paint(self.use_colors, Self::status_color(status), &label),
            result.check.name
        );
        let _ = writeln!(output, "         {}", result.detail);
    }

    fn format_summary(&self, report: &RunReport, output: &mut String) {
        let groups = report.group_results.len();
        let groups_passed = report.groups_passed();
        let count = |status| {
            report
                .group_results
                .iter()
                .map(|g| g.count(status))
                .sum::<usize>()
        };

        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(
            output,
            "Summary: {groups} groups, {} passed, {} failed ({} checks: {} passed, {} failed, {} errors)",
            paint(self.use_colors, ansi::GREEN, &groups_passed.to_string()),
            paint(self.use_colors, ansi::RED, &(groups - groups_passed).to_string()),
            report.check_count(),
            count(CheckStatus::Pass),
            count(CheckStatus::Fail),
            count(CheckStatus::Error),
        );
        let classification = report.classification;
        let _ = writeln!(
            output,
            "Score: {:.1}% - {} ({})",
            report.overall_score,
            paint(
                self.use_colors,
                Self::classification_color(classification),
                classification.as_str()
            ),
            classification.description()
        );
        let _ = writeln!(
            output,
            "Exit success: {}",
            if report.exit_success { "yes" } else { "no" }
        );
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        Self::format_header(report, &mut output);
        for group in &report.group_results {
            output.push('\n');
            self.format_group(group, &mut output);
        }
        output.push('\n');
        self.format_summary(report, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
