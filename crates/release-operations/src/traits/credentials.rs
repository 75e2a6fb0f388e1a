use crate::Result;
use crate::types::CredentialOutcome;

/// Guarantees registry authentication is configured before publishing.
pub trait CredentialConfigurator: Send + Sync {
    /// Ensures the registry config file carries an auth-token line,
    /// creating the file or appending the line as needed. Idempotent: an
    /// existing auth line is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or config location is unavailable, or
    /// if the file cannot be read or written.
    fn ensure_auth_line(&self) -> Result<CredentialOutcome>;
}
