//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the plan command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => {
                if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// eval-dispatch CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "eval-dispatch")]
#[command(about = "Turn positional job arguments into an evaluation program invocation")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to $EVAL_DISPATCH_CONFIG, then ./eval-dispatch.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Log debug details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Positional arguments handed to the dispatcher untouched
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DispatchArgs {
    /// <config-id> <checkpoint-or-suffix> [<checkpoint-epoch>] [<extra-args>...]
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Available eval-dispatch subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the evaluation command and launch it
    Run {
        #[command(flatten)]
        dispatch: DispatchArgs,
    },

    /// Print the evaluation command without launching it
    Plan {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        #[command(flatten)]
        dispatch: DispatchArgs,
    },

    /// Write a default eval-dispatch.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Where to write the file
        #[arg(long, default_value = "eval-dispatch.toml")]
        path: PathBuf,
    },
}
