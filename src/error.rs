//! Error types for eval-dispatch
//!
//! Each concern gets its own enum; `EvalDispatchError` ties them together
//! for callers that want a single error type.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// A path template uses a placeholder its section cannot fill
    #[error("Invalid template: {0}")]
    Template(#[from] TemplateError),
}

/// Path template errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// Placeholder name is not one of the known names
    #[error("Unknown placeholder '{{{name}}}' in template '{template}'")]
    UnknownPlaceholder { template: String, name: String },

    /// Placeholder is known but not available in this template's context
    #[error("Placeholder '{{{name}}}' is not allowed in {field}")]
    NotAllowed { field: String, name: String },

    /// A `{` or `}` without its partner
    #[error("Unbalanced brace in template '{0}'")]
    UnbalancedBrace(String),
}

/// Errors starting the external program
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Child process could not be spawned or waited on
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Process image could not be replaced
    #[error("Failed to exec '{program}': {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the argument dispatcher
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Argument count is neither exactly 3 nor at least 4
    #[error("Invalid config: expected 3 or more arguments, got {count}")]
    InvalidArgumentCount { count: usize },

    /// External program could not be started
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// Top-level error type for eval-dispatch
#[derive(Debug, thiserror::Error)]
pub enum EvalDispatchError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dispatch error
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
