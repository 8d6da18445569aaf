//! Wire codec for the tic-tac-toe protocol.
//!
//! Client to server: one ASCII decimal digit per move, no delimiter.
//! Server to client: a full-state snapshot of exactly eleven comma-separated
//! fields, `cell0,...,cell8,turn,message`. A non-empty message field marks a
//! terminal game state.

use crate::board::CellIndex;
use crate::common::{Cell, Mark};
use crate::config::{MAX_PENDING_BYTES, NUM_CELLS, SNAPSHOT_FIELDS};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Encode a move as the exact ASCII decimal byte of its cell index.
pub fn encode_move(index: CellIndex) -> [u8; 1] {
    [b'0' + index.as_u8()]
}

/// Server-pushed full game state. Every snapshot replaces the previous one
/// wholesale; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub cells: [Cell; NUM_CELLS],
    pub turn: Mark,
    pub message: String,
}

impl Snapshot {
    /// A non-empty message means the game has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        !self.message.is_empty()
    }
}

/// Decode errors for inbound snapshots. All of these are recoverable: the
/// receive loop logs the offending chunk and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Wrong number of comma-separated fields (expected eleven).
    FieldCount(usize),
    /// A cell field was something other than "", "X" or "O".
    BadCell { index: usize, token: String },
    /// The turn field was something other than "X" or "O".
    BadTurn(String),
    /// Frame bytes were not valid UTF-8.
    NotUtf8,
    /// Pending input grew past the decoder's buffer cap.
    Oversized(usize),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::FieldCount(n) => {
                write!(f, "expected {} fields, got {}", SNAPSHOT_FIELDS, n)
            }
            SnapshotError::BadCell { index, token } => {
                write!(f, "invalid cell {} token {:?}", index, token)
            }
            SnapshotError::BadTurn(token) => write!(f, "invalid turn token {:?}", token),
            SnapshotError::NotUtf8 => write!(f, "frame is not valid UTF-8"),
            SnapshotError::Oversized(n) => {
                write!(f, "discarded {} buffered bytes without a complete snapshot", n)
            }
        }
    }
}

/// Split one snapshot text into its eleven fields and validate each.
pub fn parse_snapshot(text: &str) -> Result<Snapshot, SnapshotError> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != SNAPSHOT_FIELDS {
        return Err(SnapshotError::FieldCount(fields.len()));
    }
    let mut cells = [Cell::Empty; NUM_CELLS];
    for (i, token) in fields[..NUM_CELLS].iter().enumerate() {
        cells[i] = Cell::from_token(token).ok_or_else(|| SnapshotError::BadCell {
            index: i,
            token: (*token).to_string(),
        })?;
    }
    let turn =
        Mark::from_token(fields[NUM_CELLS]).ok_or_else(|| SnapshotError::BadTurn(fields[NUM_CELLS].to_string()))?;
    Ok(Snapshot {
        cells,
        turn,
        message: fields[NUM_CELLS + 1].to_string(),
    })
}

/// Buffering snapshot decoder.
///
/// The wire protocol has no framing: it assumes one socket read always
/// holds exactly one snapshot, which stream sockets do not guarantee. This decoder keeps that
/// working while also reassembling servers that terminate snapshots with a
/// newline: complete `\n`-delimited frames are drained first, and an
/// unframed buffer that already splits into eleven fields is taken as one
/// whole message. Anything malformed is reported in place and dropped.
///
/// The unframed fallback means a framed server must not rely on the
/// delimiter alone when a read boundary lands after the eleventh field: a
/// terminal snapshot split inside its message text is emitted early with
/// the truncated message, and the tail is rejected as its own frame.
#[derive(Debug, Default)]
pub struct SnapshotDecoder {
    buf: Vec<u8>,
}

impl SnapshotDecoder {
    pub fn new() -> Self {
        SnapshotDecoder { buf: Vec::new() }
    }

    /// Feed one raw read chunk, returning every complete snapshot (or
    /// per-frame decode error) it yields.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Result<Snapshot, SnapshotError>> {
        let mut out = Vec::new();
        self.buf.extend_from_slice(chunk);

        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let frame: Vec<u8> = self.buf.drain(..=pos).collect();
            let frame = &frame[..frame.len() - 1];
            let frame = frame.strip_suffix(b"\r").unwrap_or(frame);
            if frame.is_empty() {
                continue;
            }
            out.push(Self::decode_frame(frame));
        }

        if !self.buf.is_empty() {
            if let Ok(text) = core::str::from_utf8(&self.buf) {
                // Unframed fallback: eleven or more fields cannot become a
                // valid snapshot by waiting for further bytes.
                if text.split(',').count() >= SNAPSHOT_FIELDS {
                    let res = parse_snapshot(text);
                    self.buf.clear();
                    out.push(res);
                }
            }
        }

        if self.buf.len() > MAX_PENDING_BYTES {
            let len = self.buf.len();
            self.buf.clear();
            out.push(Err(SnapshotError::Oversized(len)));
        }

        out
    }

    /// Bytes currently buffered waiting for more input.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    fn decode_frame(frame: &[u8]) -> Result<Snapshot, SnapshotError> {
        let text = core::str::from_utf8(frame).map_err(|_| SnapshotError::NotUtf8)?;
        parse_snapshot(text)
    }
}
