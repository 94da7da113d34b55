//! Initialize an eval-dispatch configuration
//!
//! Writes a commented eval-dispatch.toml holding the built-in defaults.

use std::fs;
use std::path::Path;

/// Default content for eval-dispatch.toml
pub const DEFAULT_CONFIG_TOML: &str = r#"[dispatch]
version = "1"

# "exec" replaces eval-dispatch with the evaluation program,
# "wait" runs it as a child and exits with its status
launch = "exec"

# Directory to run the evaluation program in (inherited when unset)
# working_dir = "/path/to/habitat-lab"

[environment]
# Label shown in diagnostics
# name = "habitat"

[environment.vars]
# Variables set on the evaluation program
# PYTHONUNBUFFERED = "1"

# Used with exactly three arguments: <config-id> <checkpoint-path> <unused>
# Placeholders: {config}
[full]
program = "python"
args = ["-u", "habitat_baselines/run.py"]
exp_config = "habitat_baselines/config/objectnav/full/{config}.on.yaml"

# Used with four or more arguments:
# <config-id> <run-suffix> <checkpoint-epoch> [extra-args...]
# Placeholders: {config}, {epoch}, {suffix}
[extended]
program = "/opt/conda/envs/habitat/bin/python"
args = ["-u", "habitat_baselines/run.py"]
exp_config = "habitat_baselines/config/objectnav/{config}.on.yaml"
ckpt_path = "data/new_checkpoints/{config}/{config}.{epoch}.pth"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// What the init command did with the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
    Overwritten,
}

/// Run the init command
///
/// # Arguments
/// * `path` - Where to write the configuration
/// * `force` - If true, overwrite an existing file. If false, leave it alone.
pub fn run_init(path: &Path, force: bool) -> Result<InitOutcome, InitError> {
    if path.exists() {
        if path.is_dir() {
            return Err(InitError::Path(format!(
                "'{}' exists and is a directory",
                path.display()
            )));
        }
        if !force {
            return Ok(InitOutcome::Skipped);
        }
        fs::write(path, DEFAULT_CONFIG_TOML)?;
        return Ok(InitOutcome::Overwritten);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_TOML)?;
    Ok(InitOutcome::Created)
}
