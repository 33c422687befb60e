//! Forem (dev.to) publishing client
//!
//! Submits articles through the `/api/articles` endpoint. The provider owns
//! identity and deduplication: repeated submissions create duplicate drafts.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::PublishingSettings;
use crate::error::{ServerError, ServerResult};
use crate::traits::ArticlePublisher;
use shared::{PublishOutcome, PublishRequest};

/// Request timeout for the publish call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Real publishing client backed by the Forem REST API
pub struct ForemPublisher {
    client: reqwest::Client,
    settings: PublishingSettings,
}

impl ForemPublisher {
    pub fn new(settings: PublishingSettings) -> ServerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServerError::InvalidConfig {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/articles", self.settings.base_url)
    }
}

#[async_trait]
impl ArticlePublisher for ForemPublisher {
    async fn publish(&self, request: &PublishRequest) -> ServerResult<PublishOutcome> {
        debug!(
            "📤 publish request for '{}' (published: {})",
            request.title, request.published
        );

        let payload = serde_json::json!({
            "article": {
                "title": request.title,
                "body_markdown": request.content,
                "published": request.published
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("api-key", &self.settings.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| ServerError::ProviderNetwork(e.to_string()))?;

        // 201 is the provider's only "created" status; every other status
        // surfaces the raw body text unmodified.
        if response.status().as_u16() == 201 {
            let response_json: serde_json::Value = response
                .json()
                .await
                .map_err(|e| ServerError::ProviderResponse(format!("Failed to parse response: {e}")))?;

            let url = response_json
                .get("url")
                .and_then(|url| url.as_str())
                .ok_or_else(|| ServerError::ProviderResponse("No url in response".to_string()))?;

            info!("✅ published '{}' at {}", request.title, url);

            Ok(PublishOutcome::Success { url: url.to_string() })
        } else {
            let status = response.status();
            let message = response
                .text()
                .await
                .map_err(|e| ServerError::ProviderResponse(format!("Failed to read error body: {e}")))?;

            warn!("⚠️ publish of '{}' rejected with {}", request.title, status);

            Ok(PublishOutcome::Error { message })
        }
    }
}
