//! Shared types for the article generation and publishing pipeline
//!
//! Contains only the wire contract between the server and its clients,
//! plus logging setup used by both binaries. Component-internal types
//! are kept in their respective crates.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
