use std::path::PathBuf;

use thiserror::Error;

use crate::types::CommandStatus;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Report(#[from] release_report::ReportError),

    #[error("command string is empty")]
    EmptyCommand,

    #[error("failed to list changeset files in '{path}'")]
    ChangesetList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn '{program}'")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited unsuccessfully ({status})")]
    CommandFailed {
        command: String,
        status: CommandStatus,
    },

    #[error("'{command}' exited unsuccessfully ({status}): {stderr}")]
    CommandFailedWithStderr {
        command: String,
        status: CommandStatus,
        stderr: String,
    },

    #[error("NPM_TOKEN is not set")]
    MissingToken,

    #[error("HOME is not set; cannot locate the user .npmrc")]
    MissingHome,

    #[error("failed to read registry config '{path}'")]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write registry config '{path}'")]
    CredentialWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read package manifest '{path}'")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse package manifest '{path}'")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package manifest '{path}' has no version field")]
    ManifestVersionMissing { path: PathBuf },

    #[error("failed to write output '{key}' to '{path}'")]
    OutputWrite {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;
