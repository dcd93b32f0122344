use std::path::{Path, PathBuf};

use chrono::Local;

use crate::checker::{RunReport, Suite, SuiteRunner};
use crate::cli::CheckArgs;
use crate::config::{FileSuiteLoader, SuiteLoader};
use crate::filesystem::{EntryKind, FileSystem, RealFileSystem};
use crate::output::{
    Console, FileReportSink, JsonFormatter, Level, OutputFormat, ReportEmitter, ReportFormatter,
    TerminalConsole, TextFormatter,
};
use crate::{ArtifactGuardError, EXIT_CHECKS_FAILED, EXIT_STARTUP_ERROR, EXIT_SUCCESS, Result};

use super::OutputOptions;

#[must_use]
pub fn run_check(args: &CheckArgs, options: OutputOptions) -> i32 {
    let console = TerminalConsole::new(options.color);
    match run_check_impl(args, options, &RealFileSystem, &console) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            console.emit(Level::Error, &e.to_string());
            EXIT_STARTUP_ERROR
        }
    }
}

/// Run the suite with an injected filesystem and console.
///
/// # Errors
/// Returns an error only for startup failures: an invalid root, or a suite
/// definition that is missing, unreadable or invalid. Nothing has run when
/// an error is returned.
pub fn run_check_impl<F: FileSystem>(
    args: &CheckArgs,
    options: OutputOptions,
    fs: &F,
    console: &dyn Console,
) -> Result<i32> {
    // 1. Resolve and validate the project root
    let root = resolve_root(args.root.as_deref(), fs)?;

    // 2. Load and validate the suite definition
    let suite = load_suite(args, fs, &root)?;
    tracing::info!(
        root = %root.display(),
        groups = suite.groups.len(),
        checks = suite.check_count(),
        "running suite"
    );

    // 3. Run every group
    let results = SuiteRunner::new(fs, &root).run(&suite);
    let report = RunReport::new(Local::now(), root.clone(), suite.name, results);

    // 4. Render and persist
    let formatter: Box<dyn ReportFormatter> = match args.format {
        OutputFormat::Text => Box::new(TextFormatter::new(options.color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let sink = (!args.no_report).then(|| {
        args.report
            .clone()
            .map_or_else(|| FileReportSink::in_root(&root), FileReportSink::new)
    });
    let mut emitter = ReportEmitter::new(&*formatter, console).with_quiet(options.quiet);
    if let Some(sink) = &sink {
        emitter = emitter.with_sink(sink);
    }
    if let Err(e) = emitter.emit(&report) {
        console.emit(Level::Error, &format!("failed to render report: {e}"));
    }

    // 5. Exit code follows the verdict only
    Ok(if report.exit_success {
        EXIT_SUCCESS
    } else {
        EXIT_CHECKS_FAILED
    })
}

/// Resolve the project root, defaulting to the current directory.
///
/// # Errors
/// Returns an error if the root does not exist, is not a directory, or
/// cannot be inspected.
pub fn resolve_root<F: FileSystem>(root: Option<&Path>, fs: &F) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => fs.current_dir()?,
    };
    let invalid = |reason: String| ArtifactGuardError::InvalidRoot {
        path: root.clone(),
        reason,
    };

    match fs.entry_kind(&root) {
        Ok(Some(EntryKind::Directory)) => {}
        Ok(Some(EntryKind::File)) => return Err(invalid("not a directory".to_string())),
        Ok(None) => return Err(invalid("path does not exist".to_string())),
        Err(e) => return Err(invalid(e.to_string())),
    }

    fs.canonicalize(&root).map_err(|e| invalid(e.to_string()))
}

fn load_suite<F: FileSystem>(args: &CheckArgs, fs: &F, root: &Path) -> Result<Suite> {
    let loader = FileSuiteLoader::with_fs(fs);
    let loaded = match &args.suite {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load(root)?,
    };
    let suite = loaded.config.into_suite()?;

    if args.groups.is_empty() {
        return Ok(suite);
    }
    if let Some(unknown) = args
        .groups
        .iter()
        .find(|name| !suite.groups.iter().any(|g| &g.name == *name))
    {
        let available: Vec<_> = suite.groups.iter().map(|g| g.name.as_str()).collect();
        return Err(ArtifactGuardError::Config(format!(
            "unknown group '{unknown}'; available groups: {}",
            available.join(", ")
        )));
    }
    Ok(suite.retain_groups(&args.groups))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
