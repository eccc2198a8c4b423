//! Transports carrying MCP sessions to the server.
//!
//! - **STDIO**: standard input/output, one session per process - feature: `stdio`
//! - **TCP**: one session per accepted connection - feature: `tcp`
//!
//! Framing and the protocol loop belong to rmcp; a transport only decides
//! where the byte streams come from.

mod config;
mod error;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(feature = "tcp")]
pub mod tcp;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

use tracing::info;

use crate::core::McpServer;

/// Serve `server` over the configured transport until it shuts down.
pub async fn serve(config: TransportConfig, server: McpServer) -> TransportResult<()> {
    info!("Starting transport: {}", config);

    match config {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => stdio::run(server).await,
        #[cfg(feature = "tcp")]
        TransportConfig::Tcp(cfg) => tcp::TcpTransport::new(cfg).run(server).await,
    }
}
