use crate::checker::RunReport;
use crate::error::Result;

use super::console::{Console, Level};
use super::sink::ReportSink;
use super::text::TextFormatter;
use super::ReportFormatter;

/// What happened to the persisted copy of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Saved(String),
    Failed(String),
    Skipped,
}

/// Renders a report to the console and stores an uncolored copy.
///
/// Failing to store the copy only produces a warning; it never changes the
/// report's verdict.
pub struct ReportEmitter<'a> {
    formatter: &'a dyn ReportFormatter,
    sink: Option<&'a dyn ReportSink>,
    console: &'a dyn Console,
    quiet: bool,
}

impl<'a> ReportEmitter<'a> {
    #[must_use]
    pub fn new(formatter: &'a dyn ReportFormatter, console: &'a dyn Console) -> Self {
        Self {
            formatter,
            sink: None,
            console,
            quiet: false,
        }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn ReportSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Suppress the "report saved" notice. Warnings are always shown.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// If the chosen formatter fails, the console gets the plain text
    /// rendering instead, and the persisted copy is written either way.
    ///
    /// # Errors
    /// Returns an error only if the plain text rendering itself fails.
    /// Persistence failures are not errors.
    pub fn emit(&self, report: &RunReport) -> Result<Persistence> {
        let plain = TextFormatter::plain().format(report)?;
        match self.formatter.format(report) {
            Ok(rendered) => self.console.emit(Level::Info, rendered.trim_end()),
            Err(e) => {
                tracing::warn!(error = %e, "report formatter failed, using plain text");
                self.console.emit(
                    Level::Warn,
                    &format!("Could not render report in the requested format: {e}"),
                );
                self.console.emit(Level::Info, plain.trim_end());
            }
        }

        let Some(sink) = self.sink else {
            return Ok(Persistence::Skipped);
        };

        let location = sink.location();
        match sink.persist(&plain) {
            Ok(()) => {
                if !self.quiet {
                    self.console
                        .emit(Level::Info, &format!("Report saved to {location}"));
                }
                Ok(Persistence::Saved(location))
            }
            Err(e) => {
                tracing::warn!(%location, error = %e, "failed to persist report");
                let message = format!("Could not save report to {location}: {e}");
                self.console.emit(Level::Warn, &message);
                Ok(Persistence::Failed(message))
            }
        }
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
