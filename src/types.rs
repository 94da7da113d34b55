#![forbid(unsafe_code)]

//! Core domain types for eval-dispatch

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed `--run-type` value passed to the evaluation program
pub const RUN_TYPE: &str = "eval";

/// Which command template an invocation selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalMode {
    /// Exactly three arguments: direct checkpoint path
    Full,
    /// Four or more arguments: run suffix, derived checkpoint path, extras
    Extended,
}

impl EvalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalMode::Full => "full",
            EvalMode::Extended => "extended",
        }
    }
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the external program is started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Replace this process with the external program (Unix only)
    #[default]
    Exec,
    /// Spawn the external program and wait for it to exit
    Wait,
}

/// Named placeholders available in path templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{config}`: the config identifier (`args[0]`)
    Config,
    /// `{epoch}`: the checkpoint epoch or tag (`args[2]`, extended mode)
    Epoch,
    /// `{suffix}`: the run suffix (`args[1]`, extended mode)
    Suffix,
}

impl Placeholder {
    /// Look up a placeholder by the name written between braces
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "config" => Some(Placeholder::Config),
            "epoch" => Some(Placeholder::Epoch),
            "suffix" => Some(Placeholder::Suffix),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::Config => "config",
            Placeholder::Epoch => "epoch",
            Placeholder::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}
