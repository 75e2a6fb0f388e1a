use std::path::Path;

use crate::Result;

/// Reads the version of the package being released from its manifest.
pub trait ManifestReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed, or if it
    /// carries no version field.
    fn package_version(&self, cwd: &Path) -> Result<String>;
}
