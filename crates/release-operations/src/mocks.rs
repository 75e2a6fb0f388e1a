use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    ChangesetReader, CommandRunner, CredentialConfigurator, ManifestReader, OutputSink,
};
use crate::types::{CapturedOutput, CommandLine, CommandStatus, CredentialOutcome};

#[derive(Clone)]
pub struct MockChangesets {
    pending: Vec<PathBuf>,
    failing: bool,
}

impl MockChangesets {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            failing: false,
        }
    }

    /// A reader whose enumeration always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            pending: Vec::new(),
            failing: true,
        }
    }

    #[must_use]
    pub fn with_pending(mut self, path: impl Into<PathBuf>) -> Self {
        self.pending.push(path.into());
        self
    }
}

impl Default for MockChangesets {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangesetReader for MockChangesets {
    fn pending_changesets(&self, cwd: &Path) -> Result<Vec<PathBuf>> {
        if self.failing {
            return Err(OperationError::ChangesetList {
                path: cwd.join(".changeset"),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock enumeration error",
                ),
            });
        }
        Ok(self.pending.clone())
    }
}

/// One command observed by [`MockCommandRunner`], in call order.
#[derive(Debug, Clone)]
pub struct RecordedInvocation {
    pub command: CommandLine,
    pub cwd: PathBuf,
    /// Whether the command ran with its output captured.
    pub captured: bool,
}

#[derive(Default)]
struct RunnerState {
    run_statuses: VecDeque<CommandStatus>,
    captured_outputs: VecDeque<CapturedOutput>,
    invocations: Vec<RecordedInvocation>,
}

/// Replays queued statuses and outputs, falling back to a zero exit with
/// empty streams once a queue runs dry. Clones share one recording.
#[derive(Clone)]
pub struct MockCommandRunner {
    state: Arc<Mutex<RunnerState>>,
}

impl MockCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RunnerState::default())),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_run_status(self, status: CommandStatus) -> Self {
        self.state
            .lock()
            .expect("lock poisoned")
            .run_statuses
            .push_back(status);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_captured(self, output: CapturedOutput) -> Self {
        self.state
            .lock()
            .expect("lock poisoned")
            .captured_outputs
            .push_back(output);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.state
            .lock()
            .expect("lock poisoned")
            .invocations
            .clone()
    }
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<CommandStatus> {
        let mut state = self.state.lock().expect("lock poisoned");
        state.invocations.push(RecordedInvocation {
            command: command.clone(),
            cwd: cwd.to_path_buf(),
            captured: false,
        });
        Ok(state
            .run_statuses
            .pop_front()
            .unwrap_or(CommandStatus { code: Some(0) }))
    }

    fn run_captured(&self, command: &CommandLine, cwd: &Path) -> Result<CapturedOutput> {
        let mut state = self.state.lock().expect("lock poisoned");
        state.invocations.push(RecordedInvocation {
            command: command.clone(),
            cwd: cwd.to_path_buf(),
            captured: true,
        });
        Ok(state
            .captured_outputs
            .pop_front()
            .unwrap_or_else(|| CapturedOutput {
                status: CommandStatus { code: Some(0) },
                stdout: String::new(),
                stderr: String::new(),
            }))
    }
}

#[derive(Clone)]
pub struct MockCredentials {
    failing: bool,
    calls: Arc<Mutex<usize>>,
}

impl MockCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self {
            failing: false,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// A configurator that fails as if the token were never provided.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("lock poisoned")
    }
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialConfigurator for MockCredentials {
    fn ensure_auth_line(&self) -> Result<CredentialOutcome> {
        *self.calls.lock().expect("lock poisoned") += 1;
        if self.failing {
            return Err(OperationError::MissingToken);
        }
        Ok(CredentialOutcome::Created)
    }
}

#[derive(Clone)]
pub struct MockManifest {
    version: Option<String>,
}

impl MockManifest {
    #[must_use]
    pub fn new() -> Self {
        Self { version: None }
    }

    /// A reader that reports the manifest as missing its version.
    #[must_use]
    pub fn failing() -> Self {
        Self { version: None }
    }

    #[must_use]
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }
}

impl Default for MockManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for MockManifest {
    fn package_version(&self, cwd: &Path) -> Result<String> {
        self.version
            .clone()
            .ok_or_else(|| OperationError::ManifestVersionMissing {
                path: cwd.join("package.json"),
            })
    }
}

#[derive(Clone)]
pub struct MockOutputSink {
    entries: Arc<Mutex<Vec<(String, String)>>>,
    failing: bool,
}

impl MockOutputSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    /// A sink whose writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            failing: true,
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockOutputSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for MockOutputSink {
    fn set_output(&self, key: &str, value: &str) -> Result<()> {
        if self.failing {
            return Err(OperationError::OutputWrite {
                key: key.to_string(),
                path: PathBuf::from("/mock/outputs"),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock write error",
                ),
            });
        }
        self.entries
            .lock()
            .expect("lock poisoned")
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_replays_queued_statuses_then_defaults() {
        let runner = MockCommandRunner::new().with_run_status(CommandStatus { code: Some(1) });
        let command = CommandLine::new("true", Vec::<String>::new());

        let first = runner
            .run(&command, Path::new("/work"))
            .expect("first run succeeds");
        let second = runner
            .run(&command, Path::new("/work"))
            .expect("second run succeeds");

        assert_eq!(first.code, Some(1));
        assert_eq!(second.code, Some(0));
        assert_eq!(runner.invocations().len(), 2);
    }

    #[test]
    fn runner_clones_share_one_recording() {
        let runner = MockCommandRunner::new();
        let clone = runner.clone();
        let command = CommandLine::new("true", Vec::<String>::new());

        clone
            .run(&command, Path::new("/work"))
            .expect("run on the clone succeeds");

        assert_eq!(runner.invocations().len(), 1);
    }
}
