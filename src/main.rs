//! Server entry point.
//!
//! Loads configuration, opens and seeds the product store, then serves MCP
//! over the configured transport until the client goes away.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use product_mcp_server::core::{Config, McpServer, transport};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = match McpServer::bootstrap(config.clone()) {
        Ok(server) => server,
        Err(e) => {
            error!(path = %config.store.path.display(), "Server initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    transport::serve(config.transport, server).await?;

    info!("Server shutting down");
    Ok(())
}

/// `RUST_LOG` wins over `MCP_LOG_LEVEL` when set.
///
/// Output goes to stderr; stdout carries the STDIO transport.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
