//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod init;
pub mod plan;
pub mod run;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, DispatchArgs, OutputFormat};
