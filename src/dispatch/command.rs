//! Assembling the delegated command line

use crate::config::{DispatchConfig, TemplateVars};
use crate::dispatch::invocation::Invocation;
use crate::types::{EvalMode, RUN_TYPE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// A fully built external program invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    pub mode: EvalMode,
    pub program: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub working_dir: Option<PathBuf>,
}

impl CommandLine {
    /// Build the command for an invocation
    ///
    /// Flag order: `--run-type`, `--exp-config`, then `--ckpt-path` for
    /// full mode or `--run-suffix`, `--ckpt-path` and the extra arguments
    /// for extended mode.
    pub fn build(invocation: &Invocation, config: &DispatchConfig) -> Self {
        let (program, args) = match invocation {
            Invocation::Full {
                config: config_id,
                checkpoint_path,
                ..
            } => {
                let template = &config.full;
                let vars = TemplateVars {
                    config: config_id,
                    ..Default::default()
                };

                let mut args = template.args.clone();
                args.extend([
                    "--run-type".to_string(),
                    RUN_TYPE.to_string(),
                    "--exp-config".to_string(),
                    template.exp_config.render(&vars),
                    "--ckpt-path".to_string(),
                    checkpoint_path.clone(),
                ]);
                (template.program.clone(), args)
            }
            Invocation::Extended {
                config: config_id,
                run_suffix,
                checkpoint_epoch,
                extra_args,
            } => {
                let template = &config.extended;
                let vars = TemplateVars {
                    config: config_id,
                    epoch: Some(checkpoint_epoch.as_str()),
                    suffix: Some(run_suffix.as_str()),
                };

                let mut args = template.args.clone();
                args.reserve(8 + extra_args.len());
                args.extend([
                    "--run-type".to_string(),
                    RUN_TYPE.to_string(),
                    "--exp-config".to_string(),
                    template.exp_config.render(&vars),
                    "--run-suffix".to_string(),
                    run_suffix.clone(),
                    "--ckpt-path".to_string(),
                    template.ckpt_path.render(&vars),
                ]);
                args.extend(extra_args.iter().cloned());
                (template.program.clone(), args)
            }
        };

        Self {
            mode: invocation.mode(),
            program,
            args,
            env: config.environment.vars.clone(),
            working_dir: config.dispatch.working_dir.clone(),
        }
    }

    /// Convert into a `std::process::Command` ready to spawn or exec
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).envs(&self.env);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// Program and arguments joined by single spaces, unquoted
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
