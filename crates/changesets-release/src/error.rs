use thiserror::Error;

use release_operations::OperationError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to resolve current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;
