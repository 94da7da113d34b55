//! Parsing and validation for eval-dispatch.toml configuration files

use crate::config::template::PathTemplate;
use crate::error::ConfigError;
use crate::types::{LaunchMode, Placeholder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "eval-dispatch.toml";

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "EVAL_DISPATCH_CONFIG";

const DEFAULT_ENTRYPOINT: &str = "habitat_baselines/run.py";

/// Main configuration struct for eval-dispatch.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    /// Dispatcher settings
    #[serde(default)]
    pub dispatch: DispatchMeta,

    /// Execution environment handed to the external program
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Template used with exactly three arguments
    #[serde(default)]
    pub full: FullTemplate,

    /// Template used with four or more arguments
    #[serde(default)]
    pub extended: ExtendedTemplate,
}

impl DispatchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: DispatchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.dispatch.version
            )));
        }

        if self.full.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "full.program must not be empty".to_string(),
            ));
        }
        if self.extended.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "extended.program must not be empty".to_string(),
            ));
        }

        // Full mode only has a config identifier to substitute
        self.full
            .exp_config
            .restrict_to("full.exp_config", &[Placeholder::Config])?;

        let extended_vars = [Placeholder::Config, Placeholder::Epoch, Placeholder::Suffix];
        self.extended
            .exp_config
            .restrict_to("extended.exp_config", &extended_vars)?;
        self.extended
            .ckpt_path
            .restrict_to("extended.ckpt_path", &extended_vars)?;

        for key in self.environment.vars.keys() {
            if key.is_empty() || key.contains('=') || key.contains('\0') {
                return Err(ConfigError::Validation(format!(
                    "Invalid environment variable name '{}'",
                    key
                )));
            }
        }

        Ok(())
    }
}

/// `[dispatch]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchMeta {
    /// Configuration version (must be "1")
    #[serde(default = "default_version")]
    pub version: String,

    /// Exec handoff or spawn-and-wait
    #[serde(default)]
    pub launch: LaunchMode,

    /// Working directory for the external program (inherited when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Default for DispatchMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
            launch: LaunchMode::default(),
            working_dir: None,
        }
    }
}

fn default_version() -> String {
    "1".to_string()
}

/// `[environment]` section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Label for the execution environment, shown in diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Variables set on the external program, on top of the inherited ones
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

/// `[full]` section: program A
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullTemplate {
    #[serde(default = "default_full_program")]
    pub program: String,

    /// Arguments placed before the evaluation flags
    #[serde(default = "default_program_args")]
    pub args: Vec<String>,

    #[serde(default = "default_full_exp_config")]
    pub exp_config: PathTemplate,
}

impl Default for FullTemplate {
    fn default() -> Self {
        Self {
            program: default_full_program(),
            args: default_program_args(),
            exp_config: default_full_exp_config(),
        }
    }
}

/// `[extended]` section: program B
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtendedTemplate {
    #[serde(default = "default_extended_program")]
    pub program: String,

    /// Arguments placed before the evaluation flags
    #[serde(default = "default_program_args")]
    pub args: Vec<String>,

    #[serde(default = "default_extended_exp_config")]
    pub exp_config: PathTemplate,

    #[serde(default = "default_extended_ckpt_path")]
    pub ckpt_path: PathTemplate,
}

impl Default for ExtendedTemplate {
    fn default() -> Self {
        Self {
            program: default_extended_program(),
            args: default_program_args(),
            exp_config: default_extended_exp_config(),
            ckpt_path: default_extended_ckpt_path(),
        }
    }
}

fn default_full_program() -> String {
    "python".to_string()
}

fn default_extended_program() -> String {
    "/opt/conda/envs/habitat/bin/python".to_string()
}

fn default_program_args() -> Vec<String> {
    vec!["-u".to_string(), DEFAULT_ENTRYPOINT.to_string()]
}

fn builtin_template(source: &'static str) -> PathTemplate {
    // Only called with the literals below
    PathTemplate::parse(source).unwrap_or_else(|e| panic!("built-in template invalid: {e}"))
}

fn default_full_exp_config() -> PathTemplate {
    builtin_template("habitat_baselines/config/objectnav/full/{config}.on.yaml")
}

fn default_extended_exp_config() -> PathTemplate {
    builtin_template("habitat_baselines/config/objectnav/{config}.on.yaml")
}

fn default_extended_ckpt_path() -> PathTemplate {
    builtin_template("data/new_checkpoints/{config}/{config}.{epoch}.pth")
}
