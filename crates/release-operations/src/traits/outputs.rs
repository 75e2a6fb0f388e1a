use crate::Result;

/// Reports named output values to the hosting environment.
pub trait OutputSink: Send + Sync {
    /// Publishes one named output value.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn set_output(&self, key: &str, value: &str) -> Result<()>;
}
