use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Report file name used when no explicit report path is given.
pub const DEFAULT_REPORT_NAME: &str = "artifact-guard-report.txt";

/// Destination for the persisted report.
pub trait ReportSink {
    /// Replace the stored report with `contents`.
    ///
    /// # Errors
    /// Returns an error if the report cannot be written.
    fn persist(&self, contents: &str) -> io::Result<()>;

    /// Where the report goes, for messages.
    fn location(&self) -> String;
}

/// Writes the report to a file, truncating any previous report.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<root>/artifact-guard-report.txt`
    #[must_use]
    pub fn in_root(root: &Path) -> Self {
        Self::new(root.join(DEFAULT_REPORT_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    fn persist(&self, contents: &str) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        writer.write_all(contents.as_bytes())?;
        writer.flush()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
