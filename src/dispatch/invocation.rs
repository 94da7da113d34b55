//! Validating parser for positional invocation arguments

use crate::error::DispatchError;
use crate::types::EvalMode;
use serde::Serialize;

/// Parsed positional arguments
///
/// The variant is chosen by argument count alone: exactly three selects
/// `Full`, four or more selects `Extended`. Argument contents are never
/// inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Invocation {
    /// `<config-id> <checkpoint-path> <unused>`
    Full {
        config: String,
        checkpoint_path: String,
        /// Third argument. Accepted for compatibility with existing job
        /// scripts but never placed in the command line.
        unused: String,
    },
    /// `<config-id> <run-suffix> <checkpoint-epoch> [extra-args...]`
    Extended {
        config: String,
        run_suffix: String,
        checkpoint_epoch: String,
        extra_args: Vec<String>,
    },
}

impl Invocation {
    /// Parse positional arguments into an invocation
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidArgumentCount` for fewer than three
    /// arguments.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, DispatchError> {
        let owned: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        Self::from_vec(owned)
    }

    /// Same as [`Invocation::parse`] but takes ownership of the arguments
    pub fn from_vec(args: Vec<String>) -> Result<Self, DispatchError> {
        let count = args.len();
        let mut iter = args.into_iter();

        match (count, iter.next(), iter.next(), iter.next()) {
            (3, Some(config), Some(checkpoint_path), Some(unused)) => Ok(Invocation::Full {
                config,
                checkpoint_path,
                unused,
            }),
            (4.., Some(config), Some(run_suffix), Some(checkpoint_epoch)) => {
                Ok(Invocation::Extended {
                    config,
                    run_suffix,
                    checkpoint_epoch,
                    extra_args: iter.collect(),
                })
            }
            _ => Err(DispatchError::InvalidArgumentCount { count }),
        }
    }

    pub fn mode(&self) -> EvalMode {
        match self {
            Invocation::Full { .. } => EvalMode::Full,
            Invocation::Extended { .. } => EvalMode::Extended,
        }
    }

    /// The config identifier (`args[0]`)
    pub fn config(&self) -> &str {
        match self {
            Invocation::Full { config, .. } | Invocation::Extended { config, .. } => config,
        }
    }

    /// Arguments that were accepted but not forwarded
    pub fn ignored(&self) -> &[String] {
        match self {
            Invocation::Full { unused, .. } => std::slice::from_ref(unused),
            Invocation::Extended { .. } => &[],
        }
    }
}
