use std::path::Path;
use std::process::{Command, Stdio};

use crate::Result;
use crate::error::OperationError;
use crate::traits::CommandRunner;
use crate::types::{CapturedOutput, CommandLine, CommandStatus};

/// Runs commands through `std::process::Command` in the requested working
/// directory. No shell is involved; arguments are passed exactly as given.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<CommandStatus> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "running command");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| OperationError::CommandSpawn {
                program: command.program.clone(),
                source,
            })?;

        Ok(CommandStatus::from(status))
    }

    fn run_captured(&self, command: &CommandLine, cwd: &Path) -> Result<CapturedOutput> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "running command, capturing output");

        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| OperationError::CommandSpawn {
                program: command.program.clone(),
                source,
            })?;

        Ok(CapturedOutput {
            status: CommandStatus::from(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
