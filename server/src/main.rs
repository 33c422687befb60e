//! Server binary entry point

use std::net::SocketAddr;

use clap::Parser;
use shared::logging;

use server::{ForemPublisher, GeminiGenerator, Server, ServerError, ServerResult, Settings};

/// Command line arguments for the integration-layer server
#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Article generation and publishing backend")]
struct Args {
    /// Port for HTTP server
    #[arg(long, default_value = "8008")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    // Provider credentials come from the environment (.env honored)
    let settings = Settings::from_env().inspect_err(|e| {
        logging::log_error("server", "configuration", e);
    })?;

    let bind_address: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| ServerError::InvalidConfig {
            message: format!("Invalid port: {e}"),
        })?;

    logging::log_startup(
        "server",
        &format!("http://{} (model: {})", bind_address, settings.generation.model),
    );

    let generator = GeminiGenerator::new(settings.generation)?;
    let publisher = ForemPublisher::new(settings.publishing)?;

    let server = Server::new(bind_address, generator, publisher);
    server.run().await?;

    logging::log_shutdown("server", "stopped gracefully");
    Ok(())
}
