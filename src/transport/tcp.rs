use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::config::READ_BUFFER_SIZE;
use crate::transport::{ChunkRx, MoveTx};

/// Open a TCP connection to the server and return its two halves. A failed
/// connect is reported once and never retried.
pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<(TcpMoveTx, TcpChunkRx)> {
    let stream = TcpStream::connect(addr).await?;
    Ok(split(stream))
}

/// Split an already-established stream, e.g. one accepted in a test server.
pub fn split(stream: TcpStream) -> (TcpMoveTx, TcpChunkRx) {
    let (reader, writer) = stream.into_split();
    (
        TcpMoveTx { writer },
        TcpChunkRx {
            reader,
            buf: vec![0u8; READ_BUFFER_SIZE],
        },
    )
}

pub struct TcpMoveTx {
    writer: OwnedWriteHalf,
}

#[async_trait::async_trait]
impl MoveTx for TcpMoveTx {
    async fn send(&mut self, frame: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(frame).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::BrokenPipe
                || e.kind() == std::io::ErrorKind::ConnectionReset
            {
                anyhow::anyhow!("Connection closed by peer")
            } else {
                anyhow::anyhow!("Write error: {}", e)
            }
        })
    }
}

pub struct TcpChunkRx {
    reader: OwnedReadHalf,
    buf: Vec<u8>,
}

#[async_trait::async_trait]
impl ChunkRx for TcpChunkRx {
    async fn recv(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        match self.reader.read(&mut self.buf).await {
            Ok(0) => Ok(None),
            Ok(n) => Ok(Some(self.buf[..n].to_vec())),
            // No distinction between graceful and abrupt closure.
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionReset => Ok(None),
            Err(e) => Err(anyhow::anyhow!("Read error: {}", e)),
        }
    }
}
