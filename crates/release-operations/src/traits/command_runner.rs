use std::path::Path;

use crate::Result;
use crate::types::{CapturedOutput, CommandLine, CommandStatus};

/// Runs external commands. Exit-code policy stays with the caller: a
/// non-zero exit is reported through the returned status, never as an
/// error, because each pipeline step treats it differently.
pub trait CommandRunner: Send + Sync {
    /// Runs the command in `cwd`, streaming its output through to the
    /// parent process.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<CommandStatus>;

    /// Runs the command in `cwd` with stdout and stderr captured.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run_captured(&self, command: &CommandLine, cwd: &Path) -> Result<CapturedOutput>;
}
