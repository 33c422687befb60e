//! Real service implementations for outbound provider calls

pub mod generation;
pub mod publisher;

pub use generation::GeminiGenerator;
pub use publisher::ForemPublisher;
