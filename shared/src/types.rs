//! Wire contract types shared between the server and its clients

use serde::{Deserialize, Serialize};

/// Request body for the article generation endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub title: String,
}

/// Response body for the article generation endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub article: String,
}

/// Request body for the publish endpoint
///
/// `published` controls the draft flag on the publishing provider side.
/// Omitting it requests an unpublished draft.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublishRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub published: bool,
}

/// Caller-visible result of a publish call
///
/// Exactly one of the two variants is produced for every modeled provider
/// response: `Success` carries the published URL, `Error` carries the
/// provider's raw error text unmodified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PublishOutcome {
    Success { url: String },
    Error { message: String },
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PublishOutcome::Success { .. })
    }
}
