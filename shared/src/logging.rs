//! Shared logging utilities for consistent tracing across both binaries

use tracing::{error, info};

/// Initialize the tracing subscriber with a default level
///
/// `RUST_LOG` takes precedence over the supplied level so individual
/// targets can still be tuned without touching the CLI flags.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let base_level = log_level.unwrap_or("info");
    let default_filter = format!("{base_level},hyper=warn,reqwest=warn,tower=warn");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init so tests can call this repeatedly
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log process startup with a consistent format
pub fn log_startup(component: &str, detail: &str) {
    info!("🚀 {} starting: {}", component, detail);
}

/// Log graceful shutdown
pub fn log_shutdown(component: &str, reason: &str) {
    info!("🛑 {} shutting down: {}", component, reason);
}

/// Log an error with component context
pub fn log_error(component: &str, context: &str, error: &dyn std::error::Error) {
    error!("❌ {} {}: {}", component, context, error);
}
