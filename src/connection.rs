//! Connection manager: opens the single server connection at startup and
//! owns its outbound half for the rest of the process. There is no close or
//! teardown path beyond dropping it on exit.

use tokio::net::ToSocketAddrs;

use crate::board::CellIndex;
use crate::protocol::encode_move;
use crate::transport::{tcp, ChunkRx, MoveTx};

pub struct Connection {
    tx: Box<dyn MoveTx>,
}

impl Connection {
    /// Connect to the server, returning the manager and the inbound half
    /// for the receive loop. No timeout and no retry on failure.
    pub async fn connect<A: ToSocketAddrs>(
        addr: A,
    ) -> anyhow::Result<(Self, Box<dyn ChunkRx>)> {
        let (tx, rx) = tcp::connect(addr).await?;
        Ok((Connection { tx: Box::new(tx) }, Box::new(rx)))
    }

    /// Wrap an existing outbound half, e.g. an in-memory one in tests.
    pub fn new(tx: Box<dyn MoveTx>) -> Self {
        Connection { tx }
    }

    /// Serialize the cell index as ASCII decimal and write it out. No
    /// acknowledgement is awaited.
    pub async fn send_move(&mut self, index: CellIndex) -> anyhow::Result<()> {
        self.tx.send(&encode_move(index)).await
    }
}
