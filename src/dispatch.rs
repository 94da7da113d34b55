//! Argument dispatch: positional arguments in, one external invocation out
//!
//! The dispatcher picks a command template by argument count, fills it in
//! and hands the result to a [`Launcher`]. It never looks at argument
//! contents; a bad config id or checkpoint path is the external program's
//! problem to report.

pub mod command;
pub mod invocation;
pub mod launcher;

pub use command::CommandLine;
pub use invocation::Invocation;
pub use launcher::{Launched, Launcher, ProcessLauncher, RecordingLauncher};

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use tracing::{debug, info, warn};

/// Result of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub invocation: Invocation,
    pub command: CommandLine,
    pub outcome: Launched,
}

/// Parse `args`, build the matching command and launch it
///
/// # Errors
///
/// Returns `DispatchError::InvalidArgumentCount` without touching the
/// launcher when fewer than three arguments are given, and
/// `DispatchError::Launch` when the launcher fails.
pub fn dispatch<L: Launcher + ?Sized>(
    args: &[String],
    config: &DispatchConfig,
    launcher: &mut L,
) -> Result<Dispatched, DispatchError> {
    info!(count = args.len(), "received arguments");

    let invocation = Invocation::parse(args)?;
    let command = plan(&invocation, config);

    debug!(
        program = %command.program,
        environment = config.environment.name.as_deref().unwrap_or("-"),
        working_dir = ?command.working_dir,
        "launching"
    );
    let outcome = launcher.launch(&command)?;

    Ok(Dispatched {
        invocation,
        command,
        outcome,
    })
}

/// Build the command for an already parsed invocation, logging the branch
pub fn plan(invocation: &Invocation, config: &DispatchConfig) -> CommandLine {
    match invocation {
        Invocation::Full {
            config: config_id,
            checkpoint_path,
            unused,
        } => {
            info!(
                mode = "full",
                config = %config_id,
                checkpoint = %checkpoint_path,
                "evaluating checkpoint"
            );
            warn!(
                argument = %unused,
                "third argument is accepted but not passed to the evaluation program"
            );
        }
        Invocation::Extended {
            config: config_id,
            run_suffix,
            checkpoint_epoch,
            extra_args,
        } => {
            info!(
                mode = "extended",
                config = %config_id,
                run_suffix = %run_suffix,
                epoch = %checkpoint_epoch,
                extra = ?extra_args,
                "evaluating checkpoint"
            );
        }
    }

    CommandLine::build(invocation, config)
}
