/// Board edge length. The wire protocol is defined for 3x3 only.
pub const GRID_SIZE: usize = 3;
/// Number of cells on the board.
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;
/// Fields per snapshot: nine cells, the turn marker, the result message.
pub const SNAPSHOT_FIELDS: usize = NUM_CELLS + 2;
/// Server endpoint used when none is given on the command line.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:12345";
/// Read buffer size for a single socket read.
pub const READ_BUFFER_SIZE: usize = 1024;
/// The decoder discards its buffer once pending input grows past this.
pub const MAX_PENDING_BYTES: usize = 1024;
