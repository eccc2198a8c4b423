//! Per-request context handed from the transport to every handler.

use tokio_util::sync::CancellationToken;

/// Context for a single tool call or resource read.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    ct: CancellationToken,
}

impl CallContext {
    /// Wrap the cancellation token of the transport request.
    pub fn new(ct: CancellationToken) -> Self {
        Self { ct }
    }

    /// The cancellation token of this request.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.ct
    }

    /// Whether the client has given up on this request.
    pub fn is_cancelled(&self) -> bool {
        self.ct.is_cancelled()
    }
}
