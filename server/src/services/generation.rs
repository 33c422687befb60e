//! Gemini generation client
//!
//! Wraps the `generateContent` REST endpoint. The prompt template and
//! sampling parameters are fixed; only the title varies per request.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GenerationSettings;
use crate::error::{ServerError, ServerResult};
use crate::traits::ArticleGenerator;

/// Request timeout for the generation call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed sampling parameters carried on every generation request
const TEMPERATURE: f64 = 0.2;
const TOP_P: f64 = 0.8;
const TOP_K: u32 = 40;
const MAX_OUTPUT_TOKENS: u32 = 500;

/// Build the fixed-template prompt embedding the article title
pub fn article_prompt(title: &str) -> String {
    format!(
        "Write a technical brief article about {title}. Include a real-world scenario example. \
         This article will be published to dev.to so make sure it is formatted correctly."
    )
}

/// Real generation client backed by the Gemini REST API
pub struct GeminiGenerator {
    client: reqwest::Client,
    settings: GenerationSettings,
}

impl GeminiGenerator {
    pub fn new(settings: GenerationSettings) -> ServerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServerError::InvalidConfig {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.settings.base_url, self.settings.model, self.settings.api_key
        )
    }
}

#[async_trait]
impl ArticleGenerator for GeminiGenerator {
    async fn generate(&self, title: &str) -> ServerResult<String> {
        let request_id = Uuid::new_v4();
        let prompt = article_prompt(title);

        debug!("📝 [{}] generation request for title '{}'", request_id, title);

        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topP": TOP_P,
                "topK": TOP_K,
                "maxOutputTokens": MAX_OUTPUT_TOKENS
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ServerError::ProviderNetwork(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => ServerError::ProviderAuth,
                429 => ServerError::ProviderRateLimited,
                500..=599 => ServerError::ProviderUnavailable,
                code => ServerError::ProviderStatus {
                    status: code,
                    body: response.text().await.unwrap_or_default(),
                },
            });
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ServerError::ProviderResponse(format!("Failed to parse response: {e}")))?;

        let article = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| ServerError::ProviderResponse("No text in response".to_string()))?;

        info!("✅ [{}] generated {} chars for '{}'", request_id, article.len(), title);

        Ok(article.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_title() {
        let prompt = article_prompt("Linked Lists");

        assert!(prompt.contains("Linked Lists"));
        assert!(prompt.starts_with("Write a technical brief article about"));
        assert!(prompt.contains("dev.to"));
    }

    #[test]
    fn endpoint_includes_model_and_key() {
        let generator = GeminiGenerator::new(GenerationSettings {
            api_key: "test-key".to_string(),
            model: "gemini-1.5-pro".to_string(),
            base_url: "http://localhost:9090".to_string(),
        })
        .unwrap();

        let endpoint = generator.endpoint();
        assert_eq!(
            endpoint,
            "http://localhost:9090/v1beta/models/gemini-1.5-pro:generateContent?key=test-key"
        );
    }
}
