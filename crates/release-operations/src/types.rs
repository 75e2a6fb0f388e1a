use std::fmt;

use crate::Result;
use crate::error::OperationError;

/// A program invocation split into a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Tokenizes a command string on runs of whitespace. The first token is
    /// the program, the rest are passed through verbatim. There is no shell
    /// quoting or escaping, so arguments containing whitespace are
    /// unsupported.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptyCommand`] when the string contains no
    /// tokens at all.
    pub fn parse(command: &str) -> Result<Self> {
        let mut tokens = command.split_whitespace();
        let program = tokens
            .next()
            .ok_or(OperationError::EmptyCommand)?
            .to_string();
        let args = tokens.map(str::to_string).collect();

        Ok(Self { program, args })
    }

    /// Builds a command from already-separated parts, bypassing
    /// tokenization. Used for internally assembled invocations whose
    /// arguments may contain spaces (commit messages, refspecs).
    #[must_use]
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status of a finished subprocess. `code` is `None` when the process
/// was terminated by a signal before exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    #[must_use]
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Output of a subprocess run with its streams captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: CommandStatus,
    pub stdout: String,
    pub stderr: String,
}

/// How the registry config file was brought into its configured state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialOutcome {
    /// The file did not exist and was created holding only the auth line.
    Created,
    /// The file existed without an auth line; one was appended.
    AuthLineAppended,
    /// The file already carried an auth line and was left untouched.
    AlreadyConfigured,
}
