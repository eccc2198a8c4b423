//! STDIO transport.
//!
//! Requests arrive on stdin and responses leave on stdout, so all logging
//! must go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serve a single session over stdin/stdout until the client disconnects.
pub async fn run(server: McpServer) -> TransportResult<()> {
    info!("{} ready on stdin/stdout", server.name());

    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::Session(e.to_string()))?;

    session
        .waiting()
        .await
        .map_err(|e| TransportError::Service(e.to_string()))?;

    info!("STDIO session closed");
    Ok(())
}
