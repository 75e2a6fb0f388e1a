use std::path::PathBuf;

/// Process environment the pipeline reads, captured once at startup.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Registry auth token, injected into the user `.npmrc` before
    /// publishing.
    pub npm_token: Option<String>,
    /// Home directory holding the user `.npmrc`.
    pub home: Option<PathBuf>,
    /// Output file of the hosting CI job; output reporting is skipped when
    /// unset.
    pub github_output: Option<PathBuf>,
}

impl Environment {
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            npm_token: std::env::var("NPM_TOKEN").ok(),
            home: std::env::var_os("HOME").map(PathBuf::from),
            github_output: std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }
}
