use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Once;

use regex::RegexBuilder;

use crate::filesystem::FileSystem;

use super::check::{Check, CheckKind, MatchMode, TargetType};
use super::result::CheckResult;

/// Runs single checks against a read-only filesystem rooted at `root`.
///
/// Execution never fails: I/O faults, decode faults and panics raised while
/// probing are all turned into `Error` results.
pub struct CheckExecutor<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    root: &'a Path,
}

impl<'a, F: FileSystem + ?Sized> CheckExecutor<'a, F> {
    #[must_use]
    pub const fn new(fs: &'a F, root: &'a Path) -> Self {
        Self { fs, root }
    }

    #[must_use]
    pub fn execute(&self, check: &Check) -> CheckResult {
        tracing::debug!(check = %check.name, target = %check.target.display(), "running check");

        let outcome = catch_quietly(|| self.probe(check));
        let result = outcome.unwrap_or_else(|payload| {
            CheckResult::error(
                check.clone(),
                format!("check panicked: {}", panic_message(payload.as_ref())),
            )
        });

        tracing::debug!(check = %check.name, status = result.status.as_str(), "check finished");
        result
    }

    fn probe(&self, check: &Check) -> CheckResult {
        let path = self.root.join(&check.target);
        match &check.kind {
            CheckKind::Existence { expect } => self.probe_existence(check, &path, *expect),
            CheckKind::ContentMatch {
                pattern,
                case_sensitive,
                mode,
            } => self.probe_content(check, &path, pattern, *case_sensitive, *mode),
            CheckKind::Dependency { package, sections } => {
                self.probe_dependency(check, &path, package, sections)
            }
        }
    }

    fn probe_existence(&self, check: &Check, path: &Path, expect: TargetType) -> CheckResult {
        let target = check.target.display();
        match self.fs.entry_kind(path) {
            Ok(Some(kind)) if expect.accepts(kind) => {
                CheckResult::pass(check.clone(), format!("{} {target} exists", kind.as_str()))
            }
            Ok(Some(kind)) => CheckResult::fail(
                check.clone(),
                format!(
                    "expected {} at {target}, found {}",
                    expect.as_str(),
                    kind.as_str()
                ),
            ),
            Ok(None) => CheckResult::fail(
                check.clone(),
                format!("{} {target} not found", expect.as_str()),
            ),
            Err(e) => CheckResult::error(check.clone(), format!("cannot inspect {target}: {e}")),
        }
    }

    fn probe_content(
        &self,
        check: &Check,
        path: &Path,
        pattern: &str,
        case_sensitive: bool,
        mode: MatchMode,
    ) -> CheckResult {
        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return CheckResult::error(
                    check.clone(),
                    format!("cannot read {}: {e}", check.target.display()),
                );
            }
        };

        let found = match mode {
            MatchMode::Substring if case_sensitive => content.contains(pattern),
            MatchMode::Substring => content
                .to_lowercase()
                .contains(&pattern.to_lowercase()),
            MatchMode::Regex => {
                match RegexBuilder::new(pattern)
                    .case_insensitive(!case_sensitive)
                    .build()
                {
                    Ok(re) => re.is_match(&content),
                    Err(e) => {
                        return CheckResult::error(
                            check.clone(),
                            format!("invalid pattern \"{pattern}\": {e}"),
                        );
                    }
                }
            }
        };

        let target = check.target.display();
        if found {
            CheckResult::pass(check.clone(), format!("\"{pattern}\" found in {target}"))
        } else {
            CheckResult::fail(check.clone(), format!("\"{pattern}\" not found in {target}"))
        }
    }

    fn probe_dependency(
        &self,
        check: &Check,
        path: &Path,
        package: &str,
        sections: &[String],
    ) -> CheckResult {
        let target = check.target.display();
        let manifest: serde_json::Value = match self
            .fs
            .read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
        {
            Ok(value) => value,
            Err(e) => {
                return CheckResult::error(check.clone(), format!("cannot load {target}: {e}"));
            }
        };

        let declared_in = sections.iter().find(|section| {
            manifest
                .get(section.as_str())
                .and_then(serde_json::Value::as_object)
                .is_some_and(|deps| deps.contains_key(package))
        });

        match declared_in {
            Some(section) => CheckResult::pass(
                check.clone(),
                format!("{package} declared in {target} [{section}]"),
            ),
            None => CheckResult::fail(
                check.clone(),
                format!(
                    "{package} not declared in {target} (searched: {})",
                    sections.join(", ")
                ),
            ),
        }
    }
}

thread_local! {
    static QUIET_DEPTH: Cell<u32> = const { Cell::new(0) };
}

static QUIET_HOOK: Once = Once::new();

/// `catch_unwind` without the default hook's stderr dump.
///
/// Panics raised inside `f` are logged at debug level instead; panics on
/// other threads, or outside any `catch_quietly`, still reach the previous hook.
pub(crate) fn catch_quietly<R>(f: impl FnOnce() -> R) -> std::thread::Result<R> {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if QUIET_DEPTH.with(Cell::get) == 0 {
                previous(info);
            } else {
                tracing::debug!(location = ?info.location(), "caught panic");
            }
        }));
    });

    QUIET_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    QUIET_DEPTH.with(|depth| depth.set(depth.get() - 1));
    outcome
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
