//! Integration-layer server for the article pipeline
//!
//! Exposes two HTTP operations, each a single outbound call: one relays a
//! title to a generative-text provider and returns the generated article,
//! the other relays a title/body pair to a publishing provider and returns
//! the provider's success or failure verbatim.

pub mod config;
pub mod error;
pub mod server_impl;
pub mod services;
pub mod state;
pub mod traits;

// Re-export main types
pub use config::Settings;
pub use error::{ServerError, ServerResult};
pub use server_impl::Server;
pub use state::ServerState;

// Re-export trait definitions
pub use traits::{ArticleGenerator, ArticlePublisher};

// Re-export service implementations
pub use services::{ForemPublisher, GeminiGenerator};
