//! HTTP client for the integration-layer server
//!
//! One method per backend endpoint. Non-success statuses carry the backend's
//! message text so the user sees what the provider reported.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::{ConsoleError, ConsoleResult};
use shared::{GenerateRequest, GenerateResponse, PublishOutcome, PublishRequest};

/// Request timeout for backend calls; generation can take a while
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Backend service trait for the two integration-layer operations
#[mockall::automock]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Ask the backend to generate an article body for a title
    async fn generate_article(&self, title: &str) -> ConsoleResult<String>;

    /// Ask the backend to publish a title/body pair
    async fn publish_article(&self, title: &str, content: &str, published: bool) -> ConsoleResult<PublishOutcome>;
}

/// Real backend client over HTTP
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(backend_url: &str) -> ConsoleResult<Self> {
        // Validate early so a bad URL fails at startup, not mid-session
        Url::parse(backend_url).map_err(|_| ConsoleError::InvalidBackendUrl {
            url: backend_url.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConsoleError::BackendUnreachable(e.to_string()))?;

        Ok(Self {
            base_url: backend_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate_article(&self, title: &str) -> ConsoleResult<String> {
        let url = format!("{}/api/generate-article", self.base_url);
        debug!("requesting generation from {}", url);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                title: title.to_string(),
            })
            .send()
            .await
            .map_err(|e| ConsoleError::BackendUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ConsoleError::BackendStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ConsoleError::BackendUnreachable(format!("Unreadable response: {e}")))?;

        Ok(body.article)
    }

    async fn publish_article(&self, title: &str, content: &str, published: bool) -> ConsoleResult<PublishOutcome> {
        let url = format!("{}/api/publish-article", self.base_url);
        debug!("requesting publish via {}", url);

        let response = self
            .client
            .post(&url)
            .json(&PublishRequest {
                title: title.to_string(),
                content: content.to_string(),
                published,
            })
            .send()
            .await
            .map_err(|e| ConsoleError::BackendUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ConsoleError::BackendStatus {
                status: status.as_u16(),
                message,
            });
        }

        let outcome: PublishOutcome = response
            .json()
            .await
            .map_err(|e| ConsoleError::BackendUnreachable(format!("Unreadable response: {e}")))?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_backend_url() {
        let result = HttpBackend::new("not a url");
        assert!(matches!(result, Err(ConsoleError::InvalidBackendUrl { .. })));
    }

    #[test]
    fn trims_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:8008/").unwrap();
        assert_eq!(backend.base_url, "http://localhost:8008");
    }
}
