//! State sync loop: reads raw chunks off the connection for its whole
//! lifetime, decodes snapshots, and marshals them to the UI-owning task over
//! an mpsc channel. Board state is never touched from this task.

use tokio::sync::mpsc;

use crate::protocol::{Snapshot, SnapshotDecoder};
use crate::transport::ChunkRx;

/// Events delivered to the UI-owning task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A decoded full-state snapshot to apply.
    Snapshot(Snapshot),
    /// The server closed the connection. Terminal; no reconnection.
    Disconnected,
}

/// Run until the peer closes the connection. A clean close returns `Ok(())`
/// after delivering [`UiEvent::Disconnected`]; malformed snapshots are
/// logged at warn and dropped.
pub async fn receive_loop(
    mut rx: Box<dyn ChunkRx>,
    events: mpsc::Sender<UiEvent>,
) -> anyhow::Result<()> {
    let mut decoder = SnapshotDecoder::new();
    loop {
        let chunk = match rx.recv().await? {
            Some(chunk) => chunk,
            None => {
                let _ = events.send(UiEvent::Disconnected).await;
                return Ok(());
            }
        };
        for decoded in decoder.feed(&chunk) {
            match decoded {
                Ok(snapshot) => {
                    if events.send(UiEvent::Snapshot(snapshot)).await.is_err() {
                        // UI task is gone; nothing left to drive.
                        return Ok(());
                    }
                }
                Err(e) => log::warn!("discarding malformed snapshot: {}", e),
            }
        }
    }
}
