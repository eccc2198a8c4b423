//! TCP transport.
//!
//! Every accepted connection gets its own MCP session over a clone of the
//! same `McpServer`, so the registries and the product store are shared.

use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP listener serving MCP sessions.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Accept connections until the process exits.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| TransportError::Bind {
                address: addr.clone(),
                source,
            })?;

        info!("{} listening on {}", server.name(), addr);

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
            }

            tokio::spawn(serve_connection(server.clone(), stream, peer));
        }
    }
}

async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let session = match server.serve(stream).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Failed to start session for {}: {}", peer, e);
            return;
        }
    };
    info!("Client {} connected", peer);

    match session.waiting().await {
        Ok(_) => info!("Client {} disconnected", peer),
        Err(e) => warn!("Session with {} ended with error: {}", peer, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::store::ProductStore;
    use serde_json::Value;
    use std::sync::Arc;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    const INITIALIZE: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"tcp-test","version":"0.0.0"}}}"#;

    fn server() -> McpServer {
        let store = ProductStore::open_in_memory().unwrap();
        McpServer::new(Config::default(), Arc::new(store)).unwrap()
    }

    fn local(port: u16) -> TcpConfig {
        TcpConfig {
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    #[tokio::test]
    async fn test_address_in_use_is_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = TcpTransport::new(local(port))
            .run(server())
            .await
            .unwrap_err();
        match err {
            TransportError::Bind { address, .. } => {
                assert_eq!(address, format!("127.0.0.1:{}", port))
            }
            other => panic!("Expected bind error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_gets_its_own_session() {
        let port = {
            let free = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            free.local_addr().unwrap().port()
        };
        tokio::spawn(TcpTransport::new(local(port)).run(server()));

        let mut stream = None;
        for _ in 0..50 {
            match TcpStream::connect(("127.0.0.1", port)).await {
                Ok(s) => {
                    stream = Some(s);
                    break;
                }
                Err(_) => tokio::time::sleep(Duration::from_millis(20)).await,
            }
        }
        let stream = stream.expect("transport never started listening");

        let (read, mut write) = stream.into_split();
        write.write_all(INITIALIZE.as_bytes()).await.unwrap();
        write.write_all(b"\n").await.unwrap();

        let mut lines = BufReader::new(read).lines();
        let line = tokio::time::timeout(Duration::from_secs(5), lines.next_line())
            .await
            .unwrap()
            .unwrap()
            .unwrap();

        let response: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "Demo");
    }
}
