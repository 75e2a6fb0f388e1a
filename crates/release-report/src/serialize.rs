use crate::error::{ReportError, Result};
use crate::types::PublishedPackage;

/// Serializes released packages into the JSON array carried by the
/// `published-packages` output value (`[]` when nothing was published).
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[must_use = "serialization result should be handled"]
pub fn published_packages_json(packages: &[PublishedPackage]) -> Result<String> {
    serde_json::to_string(packages).map_err(ReportError::Serialize)
}
