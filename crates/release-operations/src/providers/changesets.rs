use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::error::OperationError;
use crate::traits::ChangesetReader;

/// Directory the changeset tool keeps pending changesets in.
const CHANGESET_DIR: &str = ".changeset";

/// Lists pending changesets straight off the filesystem: every regular
/// `*.md` file under `<cwd>/.changeset/` except the conventional `README.md`
/// and dot-prefixed entries.
pub struct FileSystemChangesets;

impl FileSystemChangesets {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangesets {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangesetReader for FileSystemChangesets {
    fn pending_changesets(&self, cwd: &Path) -> Result<Vec<PathBuf>> {
        let dir = cwd.join(CHANGESET_DIR);

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(OperationError::ChangesetList { path: dir, source }),
        };

        let mut changesets = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|source| OperationError::ChangesetList {
                path: dir.clone(),
                source,
            })?;
            let file_type = entry
                .file_type()
                .map_err(|source| OperationError::ChangesetList {
                    path: dir.clone(),
                    source,
                })?;
            if !file_type.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with('.') || !name.ends_with(".md") || name == "README.md" {
                continue;
            }

            changesets.push(entry.path());
        }

        changesets.sort();

        Ok(changesets)
    }
}
