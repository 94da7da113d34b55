//! Common helper functions shared across CLI commands

use crate::config::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, DispatchConfig};
use crate::error::{ConfigError, DispatchError, EvalDispatchError};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const EXIT_SUCCESS: i32 = 0;
/// Wrong number of positional arguments
pub const EXIT_INVALID_ARGS: i32 = 2;
/// Configuration file missing, unreadable or invalid
pub const EXIT_CONFIG_ERROR: i32 = 3;
/// External program could not be started
pub const EXIT_LAUNCH_ERROR: i32 = 127;

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag
    Flag(PathBuf),
    /// `EVAL_DISPATCH_CONFIG` environment variable
    Env(PathBuf),
    /// `eval-dispatch.toml` in the working directory
    WorkingDir(PathBuf),
    /// No file; built-in defaults
    Defaults,
}

/// Decide which configuration file to use
///
/// Order: `--config`, then `EVAL_DISPATCH_CONFIG`, then
/// `./eval-dispatch.toml`, then built-in defaults. `env_value` is the
/// value of the environment variable, passed in so callers can test
/// without touching the process environment.
pub fn resolve_config_source(explicit: Option<&Path>, env_value: Option<&str>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Flag(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return ConfigSource::Env(PathBuf::from(value));
    }
    let local = Path::new(CONFIG_FILE_NAME);
    if local.is_file() {
        return ConfigSource::WorkingDir(local.to_path_buf());
    }
    ConfigSource::Defaults
}

/// Load the configuration for this run
///
/// # Errors
///
/// Returns `ConfigError::Io` if a named file cannot be read and
/// `ConfigError::Parse`/`ConfigError::Validation` if it is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<DispatchConfig, ConfigError> {
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    let source = resolve_config_source(explicit, env_value.as_deref());
    debug!(?source, "resolved configuration");

    match source {
        ConfigSource::Flag(path) | ConfigSource::Env(path) | ConfigSource::WorkingDir(path) => {
            DispatchConfig::load(path)
        }
        ConfigSource::Defaults => Ok(DispatchConfig::default()),
    }
}

/// Map an error to the process exit code
pub fn exit_code_for(error: &EvalDispatchError) -> i32 {
    match error {
        EvalDispatchError::Dispatch(DispatchError::InvalidArgumentCount { .. }) => {
            EXIT_INVALID_ARGS
        }
        EvalDispatchError::Dispatch(DispatchError::Launch(_)) => EXIT_LAUNCH_ERROR,
        EvalDispatchError::Config(_) | EvalDispatchError::Io(_) => EXIT_CONFIG_ERROR,
    }
}
