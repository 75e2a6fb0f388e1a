mod publish;
mod tag;

use std::path::Path;

use clap::{Args, Subcommand};

use crate::environment::Environment;
use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Version pending changesets and publish the resulting packages
    Publish(PublishArgs),
    /// Commit build output, tag the release, and push the major branch
    Tag(TagArgs),
}

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Command that applies pending changesets to versions and changelogs
    #[arg(long = "version-command")]
    pub(crate) version_command: String,

    /// Command that publishes packages; its output is scanned for results
    #[arg(long = "publish-command")]
    pub(crate) publish_command: String,
}

#[derive(Args)]
pub(crate) struct TagArgs {
    /// Build output directory committed onto the release commit
    #[arg(long = "dist-dir", default_value = "dist")]
    pub(crate) dist_dir: String,

    /// Remote the tag and major version branch are pushed to
    #[arg(long = "remote", default_value = "origin")]
    pub(crate) remote: String,

    /// Command that creates the release tag itself
    #[arg(long = "tag-command", default_value = "changeset tag")]
    pub(crate) tag_command: String,

    /// Do nothing when the release tag already exists on the remote
    #[arg(long = "check-remote")]
    pub(crate) check_remote: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path, environment: &Environment) -> Result<()> {
        match self {
            Self::Publish(args) => publish::run(&args, start_path, environment),
            Self::Tag(args) => tag::run(&args, start_path),
        }
    }
}
