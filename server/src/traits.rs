//! Service trait definitions for dependency injection
//!
//! Both outbound provider calls are abstracted through these traits so the
//! HTTP surface can be tested without network access.

use async_trait::async_trait;

use crate::error::ServerResult;
use shared::{PublishOutcome, PublishRequest};

/// Generative-text provider service trait
#[mockall::automock]
#[async_trait]
pub trait ArticleGenerator: Send + Sync {
    /// Generate an article body for the given title
    ///
    /// Returns the provider's text verbatim. Identical titles may yield
    /// different text on repeated calls.
    async fn generate(&self, title: &str) -> ServerResult<String>;
}

/// Publishing provider service trait
#[mockall::automock]
#[async_trait]
pub trait ArticlePublisher: Send + Sync {
    /// Submit an article to the publishing provider
    ///
    /// A provider "created" status maps to `PublishOutcome::Success`; any
    /// other provider status maps to `PublishOutcome::Error` carrying the
    /// raw response body. Transport failures surface as `Err`.
    async fn publish(&self, request: &PublishRequest) -> ServerResult<PublishOutcome>;
}
