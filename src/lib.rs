#![forbid(unsafe_code)]

//! eval-dispatch: turn positional job arguments into an evaluation run
//!
//! Cluster job scripts call eval-dispatch with a config identifier, a
//! checkpoint or run suffix, and optionally an epoch plus extra flags. The
//! argument count selects one of two command templates, which are filled
//! in and launched as the evaluation program.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, DispatchError, EvalDispatchError, LaunchError, TemplateError};

// Re-export core domain types for convenient access
pub use config::DispatchConfig;
pub use dispatch::{CommandLine, Invocation, dispatch};
pub use types::{EvalMode, LaunchMode};
