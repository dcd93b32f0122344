use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "artifact-guard")]
#[command(author, version, about = "Check a project tree for expected artifacts and score the result")]
#[command(long_about = "Runs a suite of existence and content checks against a project tree,\n\
    scores the result per group and prints a verdict.\n\n\
    Exit codes:\n  \
    0 - Score of 75% or more\n  \
    1 - Lower score, or a startup error (bad root or suite definition)")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `check` command
    #[command(flatten)]
    pub check: CheckArgs,
}

impl Cli {
    /// The command to run; a bare invocation means `check`.
    ///
    /// Check options given before an explicit `check` fill in whatever the
    /// subcommand leaves unset.
    #[must_use]
    pub fn into_command(self) -> Commands {
        match self.command {
            None => Commands::Check(self.check),
            Some(Commands::Check(args)) => Commands::Check(args.or(self.check)),
            Some(command) => command,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the suite against a project tree (default)
    Check(CheckArgs),

    /// Generate a starter suite definition
    Init(InitArgs),

    /// Suite definition utilities
    Suite(SuiteArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Project root to validate (default: current directory)
    pub root: Option<PathBuf>,

    /// Path to the suite definition (default: <root>/.artifact-guard.toml)
    #[arg(short, long)]
    pub suite: Option<PathBuf>,

    /// Where to write the plain-text report (default: <root>/artifact-guard-report.txt)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Do not write a report file
    #[arg(long, conflicts_with = "report")]
    pub no_report: bool,

    /// Console output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Only run the named group (can be specified multiple times)
    #[arg(short, long = "group")]
    pub groups: Vec<String>,
}

impl CheckArgs {
    #[must_use]
    fn or(self, outer: Self) -> Self {
        Self {
            root: self.root.or(outer.root),
            suite: self.suite.or(outer.suite),
            report: self.report.or(outer.report),
            no_report: self.no_report || outer.no_report,
            format: if self.format == OutputFormat::default() {
                outer.format
            } else {
                self.format
            },
            groups: if self.groups.is_empty() {
                outer.groups
            } else {
                self.groups
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the suite definition
    #[arg(short, long, default_value = ".artifact-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct SuiteArgs {
    #[command(subcommand)]
    pub action: SuiteAction,
}

#[derive(Subcommand, Debug)]
pub enum SuiteAction {
    /// Validate a suite definition without running it
    Validate {
        /// Path to the suite definition
        #[arg(default_value = ".artifact-guard.toml")]
        path: PathBuf,
    },

    /// Print the resolved suite
    Show {
        /// Path to the suite definition
        #[arg(default_value = ".artifact-guard.toml")]
        path: PathBuf,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
