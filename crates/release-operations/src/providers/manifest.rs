use std::fs;
use std::path::Path;

use crate::Result;
use crate::error::OperationError;
use crate::traits::ManifestReader;

/// Reads the released package's version from `<cwd>/package.json`.
pub struct PackageJsonVersion;

impl PackageJsonVersion {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PackageJsonVersion {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for PackageJsonVersion {
    fn package_version(&self, cwd: &Path) -> Result<String> {
        let path = cwd.join("package.json");

        let content = fs::read_to_string(&path).map_err(|source| OperationError::ManifestRead {
            path: path.clone(),
            source,
        })?;
        let manifest: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| OperationError::ManifestParse {
                path: path.clone(),
                source,
            })?;

        manifest
            .get("version")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or(OperationError::ManifestVersionMissing { path })
    }
}
