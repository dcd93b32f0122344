use std::fmt::Write;
use std::path::Path;

use crate::checker::{CheckKind, MatchMode, Suite};
use crate::cli::{SuiteAction, SuiteArgs};
use crate::config::{FileSuiteLoader, SuiteLoader};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::{Console, Level, OutputFormat, TerminalConsole};
use crate::{EXIT_STARTUP_ERROR, EXIT_SUCCESS, Result};

use super::OutputOptions;

#[must_use]
pub fn run_suite(args: &SuiteArgs, options: OutputOptions) -> i32 {
    let console = TerminalConsole::new(options.color);
    match run_suite_impl(&args.action, &RealFileSystem, &console) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            console.emit(Level::Error, &e.to_string());
            EXIT_STARTUP_ERROR
        }
    }
}

/// Validate or print a suite definition without running it.
///
/// # Errors
/// Returns an error if the definition is missing, unparsable or invalid.
pub fn run_suite_impl<F: FileSystem>(
    action: &SuiteAction,
    fs: &F,
    console: &dyn Console,
) -> Result<()> {
    match action {
        SuiteAction::Validate { path } => {
            let suite = load_suite(path, fs)?;
            console.emit(
                Level::Info,
                &format!(
                    "Suite definition is valid: {} groups, {} checks",
                    suite.groups.len(),
                    suite.check_count()
                ),
            );
        }
        SuiteAction::Show { path, format } => {
            let suite = load_suite(path, fs)?;
            let rendered = match format {
                OutputFormat::Text => format_suite_text(&suite),
                OutputFormat::Json => serde_json::to_string_pretty(&suite)?,
            };
            console.emit(Level::Info, rendered.trim_end());
        }
    }
    Ok(())
}

fn load_suite<F: FileSystem>(path: &Path, fs: &F) -> Result<Suite> {
    let loaded = FileSuiteLoader::with_fs(fs).load_from_path(path)?;
    loaded.config.into_suite()
}

#[must_use]
pub fn format_suite_text(suite: &Suite) -> String {
    let mut output = String::new();

    if let Some(name) = &suite.name {
        let _ = writeln!(output, "Suite: {name}");
    }
    let _ = writeln!(
        output,
        "{} groups, {} checks",
        suite.groups.len(),
        suite.check_count()
    );

    for group in &suite.groups {
        let _ = writeln!(output);
        let _ = writeln!(output, "{} [{}]", group.name, group.policy);
        for check in &group.checks {
            let _ = writeln!(
                output,
                "  - {:<10} {}  ({})",
                check.kind.label(),
                check.name,
                describe(&check.kind)
            );
        }
    }

    output
}

fn describe(kind: &CheckKind) -> String {
    match kind {
        CheckKind::Existence { expect } => format!("expect {}", expect.as_str()),
        CheckKind::ContentMatch {
            case_sensitive,
            mode,
            ..
        } => {
            let mode = match mode {
                MatchMode::Substring => "substring",
                MatchMode::Regex => "regex",
            };
            let case = if *case_sensitive {
                "case-sensitive"
            } else {
                "ignore case"
            };
            format!("{mode}, {case}")
        }
        CheckKind::Dependency { sections, .. } => format!("in {}", sections.join(", ")),
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
