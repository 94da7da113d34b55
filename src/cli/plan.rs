//! Plan command implementation
//!
//! Dry run: dispatches with a recording launcher and prints the command
//! that `run` would launch.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_SUCCESS, exit_code_for, load_config};
use crate::config::DispatchConfig;
use crate::dispatch::{self, RecordingLauncher};
use crate::error::EvalDispatchError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::Write;
use std::path::Path;
use termcolor::{StandardStream, WriteColor};

/// Run the plan command
///
/// # Returns
///
/// Exit code:
/// - 0: command planned and printed
/// - 2: wrong number of arguments
/// - 3: configuration error
pub fn run_plan(
    args: &[String],
    config_path: Option<&Path>,
    format: OutputFormat,
    color: ColorChoice,
) -> i32 {
    let mut stdout = StandardStream::stdout(color.into());
    let result = load_config(config_path)
        .map_err(EvalDispatchError::from)
        .and_then(|config| write_plan(&mut stdout, args, &config, format));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Plan `args` against `config` and write the result to `out`
pub fn write_plan<W: WriteColor>(
    out: &mut W,
    args: &[String],
    config: &DispatchConfig,
    format: OutputFormat,
) -> Result<(), EvalDispatchError> {
    let mut launcher = RecordingLauncher::new();
    let dispatched = dispatch::dispatch(args, config, &mut launcher)?;
    let ignored = dispatched.invocation.ignored();

    match format {
        OutputFormat::Human => {
            HumanFormatter::new().write(out, &dispatched.command, ignored)?;
        }
        OutputFormat::Jsonl => {
            let line = JsonlFormatter::new().format(&dispatched.command, ignored);
            out.write_all(line.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}
