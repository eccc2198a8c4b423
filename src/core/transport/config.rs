//! Transport selection.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(not(any(feature = "stdio", feature = "tcp")))]
compile_error!("At least one transport feature must be enabled: stdio or tcp");

/// Which transport the server listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP listener, one MCP session per connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),
}

/// TCP listener settings.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 3000;

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
        }
    }
}

impl Default for TransportConfig {
    #[cfg(feature = "stdio")]
    fn default() -> Self {
        Self::Stdio
    }

    #[cfg(not(feature = "stdio"))]
    fn default() -> Self {
        Self::Tcp(TcpConfig::default())
    }
}

impl TransportConfig {
    /// Read `MCP_TRANSPORT`, `MCP_TCP_HOST` and `MCP_TCP_PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Unknown or disabled transports fall back to the default one; an
    /// unparsable port falls back to the default port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let kind = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match kind.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                host: lookup("MCP_TCP_HOST").unwrap_or_else(|| TcpConfig::DEFAULT_HOST.to_string()),
                port: lookup("MCP_TCP_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(TcpConfig::DEFAULT_PORT),
            }),
            _ => Self::default(),
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("STDIO (standard MCP mode)"),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => write!(f, "TCP on {}", cfg.address()),
        }
    }
}
