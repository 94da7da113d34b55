//! Run command implementation
//!
//! Loads the configuration, dispatches the positional arguments and
//! launches the external program. In exec mode a successful launch never
//! returns here.

use crate::cli::common::{EXIT_SUCCESS, exit_code_for, load_config};
use crate::dispatch::{self, Launched, ProcessLauncher};
use crate::error::EvalDispatchError;
use std::path::Path;

/// Run the run command
///
/// # Returns
///
/// Exit code:
/// - the external program's exit code (wait mode)
/// - 2: wrong number of arguments
/// - 3: configuration error
/// - 127: external program could not be started
pub fn run_run(args: &[String], config_path: Option<&Path>) -> i32 {
    match run_run_inner(args, config_path) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run_run_inner(args: &[String], config_path: Option<&Path>) -> Result<i32, EvalDispatchError> {
    let config = load_config(config_path)?;
    let mut launcher = ProcessLauncher::new(config.dispatch.launch);

    let dispatched = dispatch::dispatch(args, &config, &mut launcher)?;
    match dispatched.outcome {
        Launched::Exited(code) => {
            tracing::info!(code, "evaluation program exited");
            Ok(code)
        }
        Launched::Recorded => Ok(EXIT_SUCCESS),
    }
}
