//! Presentation layer for the article pipeline
//!
//! Collects a title from the user, previews the generated article, and
//! publishes it on request. The per-session draft lives here, not in the
//! server.

pub mod backend;
pub mod error;
pub mod session;

// Re-export main types
pub use backend::{Backend, HttpBackend};
pub use error::{ConsoleError, ConsoleResult};
pub use session::{Draft, Session};
