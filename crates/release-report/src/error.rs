use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize published packages")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
