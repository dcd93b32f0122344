use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use artifact_guard::cli::{Cli, Commands};
use artifact_guard::commands::{OutputOptions, run_check, run_init, run_suite};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let options = OutputOptions::from_cli(&cli);
    let exit_code = match cli.into_command() {
        Commands::Check(args) => run_check(&args, options),
        Commands::Init(args) => run_init(&args, options),
        Commands::Suite(args) => run_suite(&args, options),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins; otherwise the level follows `-v`/`-q`.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("artifact_guard={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
