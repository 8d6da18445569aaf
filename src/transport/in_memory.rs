use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::transport::{ChunkRx, MoveTx};

type Queue = Arc<Mutex<VecDeque<Vec<u8>>>>;

/// Queue-backed transport pair for tests: two endpoints, each a (tx, rx)
/// pair wired to the other side's queues.
pub fn pair() -> ((InMemoryTx, InMemoryRx), (InMemoryTx, InMemoryRx)) {
    let a_to_b: Queue = Arc::new(Mutex::new(VecDeque::new()));
    let b_to_a: Queue = Arc::new(Mutex::new(VecDeque::new()));
    (
        (
            InMemoryTx {
                queue: a_to_b.clone(),
            },
            InMemoryRx { queue: b_to_a.clone() },
        ),
        (
            InMemoryTx { queue: b_to_a },
            InMemoryRx { queue: a_to_b },
        ),
    )
}

pub struct InMemoryTx {
    queue: Queue,
}

#[async_trait::async_trait]
impl MoveTx for InMemoryTx {
    async fn send(&mut self, frame: &[u8]) -> anyhow::Result<()> {
        let mut queue = self.queue.lock().unwrap();
        queue.push_back(frame.to_vec());
        Ok(())
    }
}

pub struct InMemoryRx {
    queue: Queue,
}

#[async_trait::async_trait]
impl ChunkRx for InMemoryRx {
    async fn recv(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        loop {
            if let Some(chunk) = {
                let mut queue = self.queue.lock().unwrap();
                queue.pop_front()
            } {
                return Ok(Some(chunk));
            }
            // Peer tx dropped with nothing queued: the connection is closed.
            if Arc::strong_count(&self.queue) == 1 {
                return Ok(None);
            }
            yield_now().await;
        }
    }
}
