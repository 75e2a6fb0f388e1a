use std::path::{Path, PathBuf};

use tracing::info;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{CommandRunner, ManifestReader};
use crate::types::CommandLine;

/// `git ls-remote --exit-code` exits with this code when no matching refs
/// exist on the remote.
const LS_REMOTE_NO_MATCH: i32 = 2;

pub struct TagInput {
    /// Repository root every git command runs in.
    pub cwd: PathBuf,
    /// Build output directory committed onto the detached release commit.
    pub dist_dir: String,
    /// Remote the tag and major branch are pushed to.
    pub remote: String,
    /// Tool invocation that creates the release tag itself.
    pub tag_command: CommandLine,
    /// When set, skip everything if the release tag already exists remotely.
    pub check_remote: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    /// The release commit was tagged and pushed to the major branch.
    Pushed { version: String, branch: String },
    /// The remote already carries the tag; nothing was done.
    AlreadyPublished { tag: String },
}

/// Tags the current release and force-pushes it, with the build output
/// committed on top, to the `v<major>` branch of the remote.
pub struct TagOperation<R, M> {
    runner: R,
    manifest: M,
}

impl<R, M> TagOperation<R, M>
where
    R: CommandRunner,
    M: ManifestReader,
{
    pub fn new(runner: R, manifest: M) -> Self {
        Self { runner, manifest }
    }

    /// # Errors
    ///
    /// Returns an error if the package manifest cannot be read, any git step
    /// or the tag command cannot be spawned or exits non-zero, or the remote
    /// tag check exits with an unexpected status.
    pub fn execute(&self, input: &TagInput) -> Result<TagOutcome> {
        info!(cwd = %input.cwd.display(), "reading package version");
        let version = self.manifest.package_version(&input.cwd)?;
        let tag = format!("v{version}");

        if input.check_remote {
            info!(%tag, remote = %input.remote, "checking for an existing remote tag");
            if self.remote_tag_exists(input, &tag)? {
                info!(%tag, "tag already exists on the remote, skipping");
                return Ok(TagOutcome::AlreadyPublished { tag });
            }
        }

        info!(%version, dist_dir = %input.dist_dir, "committing build output on a detached head");
        self.git(&input.cwd, ["checkout", "--detach"])?;
        self.git(&input.cwd, ["add", "--force", input.dist_dir.as_str()])?;
        let message = format!("publish: v{version}");
        self.git(&input.cwd, ["commit", "-m", message.as_str()])?;

        info!(command = %input.tag_command, "creating release tag");
        self.run_checked(&input.tag_command, &input.cwd)?;

        // The first dot-separated component; versions without a dot map to
        // themselves.
        let major = version.split('.').next().unwrap_or(version.as_str());
        let branch = format!("v{major}");
        let refspec = format!("HEAD:refs/heads/{branch}");

        info!(%branch, remote = %input.remote, "pushing release tag and branch");
        self.git(
            &input.cwd,
            [
                "push",
                "--force",
                "--follow-tags",
                input.remote.as_str(),
                refspec.as_str(),
            ],
        )?;

        Ok(TagOutcome::Pushed { version, branch })
    }

    fn remote_tag_exists(&self, input: &TagInput, tag: &str) -> Result<bool> {
        let refspec = format!("refs/tags/{tag}");
        let command = CommandLine::new(
            "git",
            [
                "ls-remote",
                "--exit-code",
                input.remote.as_str(),
                "--tags",
                refspec.as_str(),
            ],
        );
        let captured = self.runner.run_captured(&command, &input.cwd)?;

        match captured.status.code {
            Some(0) => Ok(true),
            Some(LS_REMOTE_NO_MATCH) => Ok(false),
            // Anything else means the remote could not be consulted; keep
            // git's own diagnostics in the error.
            _ => Err(OperationError::CommandFailedWithStderr {
                command: command.to_string(),
                status: captured.status,
                stderr: captured.stderr.trim().to_string(),
            }),
        }
    }

    fn git<'a>(&self, cwd: &Path, args: impl IntoIterator<Item = &'a str>) -> Result<()> {
        self.run_checked(&CommandLine::new("git", args), cwd)
    }

    fn run_checked(&self, command: &CommandLine, cwd: &Path) -> Result<()> {
        let status = self.runner.run(command, cwd)?;
        if !status.success() {
            return Err(OperationError::CommandFailed {
                command: command.to_string(),
                status,
            });
        }

        Ok(())
    }
}
