//! Terminal adapter over [`GameView`]: a thin rendering layer, nothing in
//! here owns or mutates game state.

use crate::common::Cell;
use crate::config::GRID_SIZE;
use crate::game::{GameView, SessionState};

/// Character shown for one cell: its mark, its index while it still accepts
/// input, or a dot once locked.
fn cell_char(view: &GameView, row: usize, col: usize) -> char {
    let cell = match view.grid().get(row, col) {
        Ok(cell) => cell,
        Err(_) => return '?',
    };
    match cell.mark {
        Cell::Marked(m) => m.as_str().chars().next().unwrap_or('?'),
        Cell::Empty if cell.enabled => {
            char::from_digit((row * GRID_SIZE + col) as u32, 10).unwrap_or('?')
        }
        Cell::Empty => '.',
    }
}

/// Print the board and a status line for the current session state.
pub fn print_view(view: &GameView) {
    println!();
    for r in 0..GRID_SIZE {
        let mut line = String::new();
        for c in 0..GRID_SIZE {
            if c > 0 {
                line.push_str(" | ");
            }
            line.push(cell_char(view, r, c));
        }
        println!(" {}", line);
        if r + 1 < GRID_SIZE {
            println!("---+---+---");
        }
    }
    match view.state() {
        SessionState::Connecting => println!("Connecting..."),
        SessionState::Active => {
            println!("Turn: {}", view.turn());
            println!("Enter a cell index (0-8):");
        }
        SessionState::GameOver => {
            println!("{}", view.message().unwrap_or("Game over"));
            if view.connection_closed() {
                println!("Connection closed.");
            } else {
                println!("Press 'r' to reset the board.");
            }
        }
        SessionState::Failed => println!("Not connected."),
        SessionState::Disconnected => println!("Connection closed."),
    }
}
