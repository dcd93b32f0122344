pub mod check;
pub mod init;
pub mod suite;

pub use check::{resolve_root, run_check, run_check_impl};
pub use init::{generate_suite_template, run_init, run_init_impl};
pub use suite::{format_suite_text, run_suite, run_suite_impl};

use crate::cli::{Cli, ColorChoice};
use crate::output::ColorMode;

/// Presentation settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub color: ColorMode,
    pub quiet: bool,
}

impl OutputOptions {
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            color: color_choice_to_mode(cli.color),
            quiet: cli.quiet,
        }
    }
}

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}
