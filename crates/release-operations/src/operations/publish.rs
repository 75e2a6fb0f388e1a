use std::path::PathBuf;

use release_report::{PublishReport, PublishedPackage, parse_publish_output, published_packages_json};
use tracing::{info, warn};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangesetReader, CommandRunner, CredentialConfigurator, OutputSink};
use crate::types::CommandLine;

pub struct PublishInput {
    /// Working directory every step runs in.
    pub cwd: PathBuf,
    /// Applies pending changesets (version bumps, changelogs).
    pub version_command: CommandLine,
    /// Uploads packages to the registry; its stdout is parsed afterwards.
    pub publish_command: CommandLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No pending changesets; nothing was versioned or published.
    NoChangesets,
    /// The pipeline ran to completion. `packages` is empty when the publish
    /// tool reported no successes.
    Completed { packages: Vec<PublishedPackage> },
}

/// The main release pipeline: changeset check, version step, credential
/// setup, publish step, output reporting. Strictly sequential; each step
/// finishes before the next starts, and nothing is retried.
pub struct PublishOperation<CS, R, C, O> {
    changesets: CS,
    runner: R,
    credentials: C,
    outputs: O,
}

impl<CS, R, C, O> PublishOperation<CS, R, C, O>
where
    CS: ChangesetReader,
    R: CommandRunner,
    C: CredentialConfigurator,
    O: OutputSink,
{
    pub fn new(changesets: CS, runner: R, credentials: C, outputs: O) -> Self {
        Self {
            changesets,
            runner,
            credentials,
            outputs,
        }
    }

    /// # Errors
    ///
    /// Returns an error if changesets cannot be enumerated, the version
    /// command cannot be spawned or exits non-zero, credentials cannot be
    /// configured, the publish command cannot be spawned, or the outputs
    /// cannot be written. A publish command that exits non-zero is not an
    /// error; it degrades to "nothing published".
    pub fn execute(&self, input: &PublishInput) -> Result<PublishOutcome> {
        info!(cwd = %input.cwd.display(), "reading changesets");
        let pending = self.changesets.pending_changesets(&input.cwd)?;

        if pending.is_empty() {
            warn!("no changesets found, nothing to publish");
            self.emit_outputs(&[])?;
            return Ok(PublishOutcome::NoChangesets);
        }

        info!(pending = pending.len(), command = %input.version_command, "running version step");
        let status = self.runner.run(&input.version_command, &input.cwd)?;
        if !status.success() {
            return Err(OperationError::CommandFailed {
                command: input.version_command.to_string(),
                status,
            });
        }

        info!("configuring registry credentials");
        self.credentials.ensure_auth_line()?;

        info!(command = %input.publish_command, "running publish step");
        let captured = self.runner.run_captured(&input.publish_command, &input.cwd)?;
        if !captured.status.success() {
            // Surface the tool's own diagnostics; the run itself goes on.
            warn!(
                status = %captured.status,
                stderr = %captured.stderr.trim(),
                "publish command exited unsuccessfully"
            );
        }

        let packages = match parse_publish_output(&captured.stdout) {
            PublishReport::Published(packages) => packages,
            PublishReport::NoSuccessMarker => {
                warn!("no packages were published");
                Vec::new()
            }
        };

        self.emit_outputs(&packages)?;

        Ok(PublishOutcome::Completed { packages })
    }

    /// Reports both output values, `published` first, exactly once per run.
    fn emit_outputs(&self, packages: &[PublishedPackage]) -> Result<()> {
        let published = if packages.is_empty() { "false" } else { "true" };
        self.outputs.set_output("published", published)?;
        self.outputs
            .set_output("published-packages", &published_packages_json(packages)?)?;

        Ok(())
    }
}
