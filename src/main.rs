//! eval-dispatch CLI entry point

use clap::Parser;
use eval_dispatch::cli::common::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use eval_dispatch::cli::init::InitOutcome;
use eval_dispatch::cli::{Cli, Command};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config_path = cli.config.as_deref();
    let exit_code = match cli.command {
        Command::Run { dispatch } => eval_dispatch::cli::run::run_run(&dispatch.args, config_path),
        Command::Plan { format, dispatch } => {
            eval_dispatch::cli::plan::run_plan(&dispatch.args, config_path, format, cli.color)
        }
        Command::Init { force, path } => match eval_dispatch::cli::init::run_init(&path, force) {
            Ok(InitOutcome::Created) => {
                println!("Created {}", path.display());
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Overwritten) => {
                println!("Overwrote {}", path.display());
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Skipped) => {
                println!("{} already exists. Use --force to overwrite.", path.display());
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
    };

    process::exit(exit_code);
}

/// Initialize tracing subscriber for logging
///
/// Logs go to stderr so `plan` output on stdout stays machine-readable.
fn init_tracing(verbose: bool, quiet: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
