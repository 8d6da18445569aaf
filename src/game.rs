//! Client-observable game state and its session state machine.
//!
//! The server owns the authoritative game; this view only mirrors it. Every
//! received snapshot replaces the board wholesale, and a local click marks a
//! cell optimistically before the server's broadcast confirms it.

use crate::board::{CellIndex, Grid};
use crate::common::{Cell, GridError, Mark};
use crate::protocol::Snapshot;
use alloc::string::String;

/// Session states as the client observes them. `Failed` and `Disconnected`
/// are terminal: there is no retry or reconnection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connecting,
    Active,
    GameOver,
    Failed,
    Disconnected,
}

/// The board, turn indicator and result message, mutated only from the
/// UI-owning task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    grid: Grid,
    turn: Mark,
    message: Option<String>,
    state: SessionState,
    closed: bool,
}

impl GameView {
    /// Startup state: all-empty board, X to move, waiting for the connect.
    pub fn new() -> Self {
        GameView {
            grid: Grid::new(),
            turn: Mark::X,
            message: None,
            state: SessionState::Connecting,
            closed: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The server's result message once the game has ended.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::GameOver)
    }

    pub fn connected(&mut self) {
        if matches!(self.state, SessionState::Connecting) {
            self.state = SessionState::Active;
        }
    }

    pub fn connect_failed(&mut self) {
        self.state = SessionState::Failed;
    }

    pub fn disconnected(&mut self) {
        self.closed = true;
        if matches!(self.state, SessionState::Active) {
            self.state = SessionState::Disconnected;
        }
    }

    /// The server has closed the connection. Stays true in `GameOver`, where
    /// the state machine keeps the result on screen; the UI uses it to stop
    /// offering interaction.
    pub fn connection_closed(&self) -> bool {
        self.closed
    }

    /// Replace the whole view from a server snapshot: relabel all nine
    /// cells (enabled only while empty), take the turn marker, and on a
    /// non-empty message lock the board and enter `GameOver`.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        for (i, cell) in snapshot.cells.iter().enumerate() {
            // Index is in range by construction: snapshots carry NUM_CELLS cells.
            if let Ok(index) = CellIndex::new(i as u8) {
                self.grid.set(index, *cell);
            }
        }
        self.turn = snapshot.turn;
        if snapshot.is_terminal() {
            self.message = Some(snapshot.message.clone());
            self.grid.disable_all();
            self.state = SessionState::GameOver;
        } else {
            self.message = None;
        }
    }

    /// Optimistic local move: mark the cell with the current turn and
    /// disable it, before any server echo. The caller still has to send the
    /// index to the server.
    pub fn local_move(&mut self, index: CellIndex) -> Result<(), GridError> {
        if !matches!(self.state, SessionState::Active) {
            return Err(GridError::Inactive);
        }
        if !self.grid.cell(index).enabled {
            return Err(GridError::CellUnavailable);
        }
        self.grid.set(index, Cell::Marked(self.turn));
        Ok(())
    }

    /// Local-only reset back to the startup board. Never talks to the
    /// server; the connection-level game is not re-synced.
    pub fn restart(&mut self) {
        self.grid.reset();
        self.turn = Mark::X;
        self.message = None;
        if matches!(self.state, SessionState::GameOver) {
            self.state = SessionState::Active;
        }
    }
}

impl Default for GameView {
    fn default() -> Self {
        GameView::new()
    }
}
