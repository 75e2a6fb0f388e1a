use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::Result;
use crate::error::OperationError;
use crate::traits::CredentialConfigurator;
use crate::types::CredentialOutcome;

/// Case-insensitive detection of an existing auth line for the registry:
/// optional leading whitespace, the registry host prefix, then
/// `_authToken=` or `-authToken=`.
static AUTH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*//registry\.npmjs\.org/:[_-]authToken=")
        .expect("auth line pattern compiles")
});

/// Keeps the user-level `.npmrc` authenticated against `registry.npmjs.org`.
///
/// The home directory and token are injected at construction and only
/// required once the configurator actually runs, so a run that publishes
/// nothing succeeds without either.
pub struct UserNpmrc {
    home: Option<PathBuf>,
    token: Option<String>,
}

impl UserNpmrc {
    #[must_use]
    pub fn new(home: Option<PathBuf>, token: Option<String>) -> Self {
        Self { home, token }
    }
}

impl CredentialConfigurator for UserNpmrc {
    fn ensure_auth_line(&self) -> Result<CredentialOutcome> {
        let home = self.home.as_ref().ok_or(OperationError::MissingHome)?;
        let token = self.token.as_ref().ok_or(OperationError::MissingToken)?;

        let path = home.join(".npmrc");
        let auth_line = format!("//registry.npmjs.org/:_authToken={token}");

        let existing = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "creating user .npmrc");
                fs::write(&path, format!("{auth_line}\n")).map_err(|source| {
                    OperationError::CredentialWrite {
                        path: path.clone(),
                        source,
                    }
                })?;
                return Ok(CredentialOutcome::Created);
            }
            Err(source) => return Err(OperationError::CredentialRead { path, source }),
        };

        if existing.lines().any(|line| AUTH_LINE.is_match(line)) {
            tracing::debug!(path = %path.display(), "auth token line already present");
            return Ok(CredentialOutcome::AlreadyConfigured);
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|source| OperationError::CredentialWrite {
                path: path.clone(),
                source,
            })?;
        write!(file, "\n{auth_line}\n").map_err(|source| OperationError::CredentialWrite {
            path,
            source,
        })?;

        Ok(CredentialOutcome::AuthLineAppended)
    }
}
