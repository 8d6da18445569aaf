//! Common types for the client: player marks, cell contents, grid errors.

use core::fmt;

/// One of the two players, which doubles as the symbol drawn in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Parse a wire token. Only the exact strings "X" and "O" are valid.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Marked(Mark),
}

impl Cell {
    /// Parse a wire token: "" is empty, "X"/"O" are marks.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() {
            Some(Cell::Empty)
        } else {
            Mark::from_token(token).map(Cell::Marked)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Marked(m) => m.as_str(),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Errors returned by grid addressing and local move attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Flat index or coordinate outside the 3x3 grid.
    InvalidIndex,
    /// Target cell is already marked or the board is locked.
    CellUnavailable,
    /// No game in progress (not connected yet, or already over).
    Inactive,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidIndex => write!(f, "Cell index is out of range"),
            GridError::CellUnavailable => write!(f, "Cell is not available for a move"),
            GridError::Inactive => write!(f, "No game in progress"),
        }
    }
}
