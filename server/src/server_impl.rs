//! Main server implementation
//!
//! The `Server` struct wires the two provider clients into an axum router
//! using dependency injection, following the same pattern on both
//! endpoints: accept a JSON body, make one outbound call, reshape the
//! provider's answer.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::traits::{ArticleGenerator, ArticlePublisher};
use shared::{GenerateRequest, GenerateResponse, PublishOutcome, PublishRequest};

/// Main server struct with dependency injection
pub struct Server<G, P>
where
    G: ArticleGenerator,
    P: ArticlePublisher,
{
    state: Arc<ServerState>,
    generator: Arc<G>,
    publisher: Arc<P>,
}

impl<G, P> Clone for Server<G, P>
where
    G: ArticleGenerator,
    P: ArticlePublisher,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            generator: self.generator.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

impl<G, P> Server<G, P>
where
    G: ArticleGenerator + 'static,
    P: ArticlePublisher + 'static,
{
    /// Create a new server with injected provider clients
    pub fn new(bind_address: SocketAddr, generator: G, publisher: P) -> Self {
        Self {
            state: Arc::new(ServerState::new(bind_address)),
            generator: Arc::new(generator),
            publisher: Arc::new(publisher),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/api/generate-article", post(generate_article_handler))
            .route("/api/publish-article", post(publish_article_handler))
            .route("/health", get(health_handler))
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()).into_inner())
            .with_state(self.clone())
    }

    /// Start the HTTP server and block until shutdown
    pub async fn run(&self) -> ServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.state.bind_address)
            .await
            .map_err(|e| ServerError::ServerStartup(format!("Failed to bind to {}: {}", self.state.bind_address, e)))?;

        info!("🌐 Server listening on http://{}", self.state.bind_address);

        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                error!("Server error: {e}");
            }
        });

        tokio::select! {
            _ = server_task => {
                info!("HTTP server task completed");
            },
            _ = tokio::signal::ctrl_c() => {
                shared::logging::log_shutdown("server", "Received Ctrl+C signal");
            }
        }

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }
}

// HTTP Handlers

/// Generate an article body from a title
///
/// Forwards the title inside a fixed prompt to the generation provider and
/// returns the provider's text verbatim. Provider faults terminate the
/// request with an HTTP error status; there is no retry and no caching.
async fn generate_article_handler<G, P>(
    State(server): State<Server<G, P>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ServerError>
where
    G: ArticleGenerator + 'static,
    P: ArticlePublisher + 'static,
{
    let article = server.generator.generate(&request.title).await?;

    let total = server.state.record_generated();
    info!("📄 Generated article #{} for '{}'", total, request.title);

    Ok(Json(GenerateResponse { article }))
}

/// Publish a title/body pair to the publishing provider
///
/// Always answers 200 with a `PublishOutcome`: a provider "created" status
/// becomes `success` with the published URL, anything else becomes `error`
/// carrying the provider's raw body. Only transport-level faults escape as
/// HTTP errors.
async fn publish_article_handler<G, P>(
    State(server): State<Server<G, P>>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishOutcome>, ServerError>
where
    G: ArticleGenerator + 'static,
    P: ArticlePublisher + 'static,
{
    let outcome = server.publisher.publish(&request).await?;

    if outcome.is_success() {
        let total = server.state.record_published();
        info!("🚀 Published article #{}: '{}'", total, request.title);
    }

    Ok(Json(outcome))
}

/// Health check endpoint
async fn health_handler<G, P>(State(server): State<Server<G, P>>) -> Json<serde_json::Value>
where
    G: ArticleGenerator + 'static,
    P: ArticlePublisher + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "uptime_seconds": server.state.uptime_seconds(),
        "articles_generated": server.state.generated_count(),
        "articles_published": server.state.published_count(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
