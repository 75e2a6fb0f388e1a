use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::Result;
use crate::error::OperationError;
use crate::traits::OutputSink;

/// Appends `key=value` lines to the outputs file the hosting CI environment
/// names through `GITHUB_OUTPUT`. With no file configured, outputs are
/// skipped so the pipeline stays usable outside CI.
pub struct GithubOutputFile {
    path: Option<PathBuf>,
}

impl GithubOutputFile {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl OutputSink for GithubOutputFile {
    fn set_output(&self, key: &str, value: &str) -> Result<()> {
        let Some(path) = &self.path else {
            tracing::debug!(key, "no outputs file configured, skipping output");
            return Ok(());
        };

        let map_err = |source| OperationError::OutputWrite {
            key: key.to_string(),
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(map_err)?;
        writeln!(file, "{key}={value}").map_err(map_err)?;

        Ok(())
    }
}
