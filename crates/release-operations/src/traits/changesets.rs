use std::path::{Path, PathBuf};

use crate::Result;

/// Enumerates pending changeset files. Only their existence matters to the
/// pipeline; reading or interpreting their contents is the version tool's
/// job.
pub trait ChangesetReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the changeset directory cannot be enumerated.
    fn pending_changesets(&self, cwd: &Path) -> Result<Vec<PathBuf>>;
}
