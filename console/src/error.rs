//! Console-specific error types

use thiserror::Error;

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("No draft to publish: generate an article first")]
    NoDraft,

    #[error("Invalid backend URL: {url}")]
    InvalidBackendUrl { url: String },

    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("Backend returned status {status}: {message}")]
    BackendStatus { status: u16, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
