//! Connection halves. The outbound half carries encoded moves; the inbound
//! half yields raw byte chunks as the server pushes them. The two halves are
//! split so the UI task can send while the receive loop sits in a read.

/// Outbound half of a connection.
#[async_trait::async_trait]
pub trait MoveTx: Send + Sync {
    /// Write one encoded move frame to the peer.
    async fn send(&mut self, frame: &[u8]) -> anyhow::Result<()>;
}

/// Inbound half of a connection.
#[async_trait::async_trait]
pub trait ChunkRx: Send + Sync {
    /// Next chunk of raw bytes from the peer. `Ok(None)` means the peer
    /// closed the connection (the zero-byte read).
    async fn recv(&mut self) -> anyhow::Result<Option<Vec<u8>>>;
}

pub mod in_memory;
pub mod tcp;
