//! Server-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::SharedError;
use thiserror::Error;

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing required environment variable: {key}")]
    MissingEnv { key: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Provider rejected credentials")]
    ProviderAuth,

    #[error("Provider rate limit exceeded")]
    ProviderRateLimited,

    #[error("Provider temporarily unavailable")]
    ProviderUnavailable,

    #[error("Provider network error: {0}")]
    ProviderNetwork(String),

    #[error("Provider returned an unusable response: {0}")]
    ProviderResponse(String),

    #[error("Provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ServerError {
    /// HTTP status a fault surfaces as when it escapes a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::ProviderAuth
            | ServerError::ProviderNetwork(_)
            | ServerError::ProviderResponse(_)
            | ServerError::ProviderStatus { .. } => StatusCode::BAD_GATEWAY,
            ServerError::ProviderRateLimited | ServerError::ProviderUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_faults_map_to_bad_gateway() {
        assert_eq!(ServerError::ProviderAuth.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ServerError::ProviderNetwork("timed out".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ServerError::ProviderStatus {
                status: 400,
                body: "bad request".to_string()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn transient_faults_map_to_service_unavailable() {
        assert_eq!(
            ServerError::ProviderRateLimited.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServerError::ProviderUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn config_faults_map_to_internal_error() {
        let error = ServerError::MissingEnv {
            key: "GOOGLE_API_KEY".to_string(),
        };
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
