//! Starting the external program

use crate::dispatch::command::CommandLine;
use crate::error::LaunchError;
use crate::types::LaunchMode;
use std::process::ExitStatus;

/// What happened after a launch returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launched {
    /// The program ran to completion with this exit code
    Exited(i32),
    /// The command was captured instead of run
    Recorded,
}

/// Something that can run a built command line
pub trait Launcher {
    fn launch(&mut self, command: &CommandLine) -> Result<Launched, LaunchError>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher {
    mode: LaunchMode,
}

impl ProcessLauncher {
    pub fn new(mode: LaunchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    fn spawn_and_wait(command: &CommandLine) -> Result<Launched, LaunchError> {
        let status = command
            .to_command()
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })?;
        Ok(Launched::Exited(exit_code(status)))
    }

    #[cfg(unix)]
    fn exec(command: &CommandLine) -> Result<Launched, LaunchError> {
        use std::os::unix::process::CommandExt;

        // Only returns if the process image could not be replaced
        let source = command.to_command().exec();
        Err(LaunchError::Exec {
            program: command.program.clone(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn exec(command: &CommandLine) -> Result<Launched, LaunchError> {
        Self::spawn_and_wait(command)
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, command: &CommandLine) -> Result<Launched, LaunchError> {
        match self.mode {
            LaunchMode::Exec => Self::exec(command),
            LaunchMode::Wait => Self::spawn_and_wait(command),
        }
    }
}

/// Map an exit status to a shell-style exit code
///
/// Children killed by a signal report `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Captures commands without running them
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    pub commands: Vec<CommandLine>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, command: &CommandLine) -> Result<Launched, LaunchError> {
        self.commands.push(command.clone());
        Ok(Launched::Recorded)
    }
}
