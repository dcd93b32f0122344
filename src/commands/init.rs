use std::fs;

use crate::cli::InitArgs;
use crate::output::{Console, Level, TerminalConsole};
use crate::{ArtifactGuardError, EXIT_STARTUP_ERROR, EXIT_SUCCESS, Result};

use super::OutputOptions;

#[must_use]
pub fn run_init(args: &InitArgs, options: OutputOptions) -> i32 {
    let console = TerminalConsole::new(options.color);
    match run_init_impl(args, &console) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            console.emit(Level::Error, &e.to_string());
            EXIT_STARTUP_ERROR
        }
    }
}

/// Writes a starter suite definition.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs, console: &dyn Console) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ArtifactGuardError::Config(format!(
            "Suite definition already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_suite_template())?;

    console.emit(
        Level::Info,
        &format!("Created suite definition: {}", output_path.display()),
    );
    Ok(())
}

#[must_use]
pub fn generate_suite_template() -> String {
    r#"# artifact-guard suite definition
version = "1"
name = "Project artifacts"

# Each [[group]] is scored as a whole: the overall score is the share of
# groups that pass. A score of 75% or more exits with code 0.

# strict: every check must pass
[[group]]
name = "Documentation"
policy = "strict"

[[group.check]]
kind = "exists"
target = "README.md"
expect = "file"

[[group.check]]
name = "README has a usage section"
kind = "contains"
target = "README.md"
pattern = "usage"
case_sensitive = false

# threshold: passes when passed/total >= min_ratio, min_ratio in (0, 1]
[[group]]
name = "Layout"
policy = "threshold"
min_ratio = 0.5

[[group.check]]
kind = "exists"
target = "src"
expect = "dir"

[[group.check]]
kind = "exists"
target = "tests"
expect = "dir"

# [[group.check]]
# kind = "contains"
# target = "src/main.rs"
# pattern = 'fn\s+main'
# regex = true

# [[group]]
# name = "Dependencies"
#
# [[group.check]]
# kind = "dependency"
# target = "package.json"
# pattern = "express"
# sections = ["dependencies"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
