//! Pure tic-tac-toe rules: board, win detection and turn handling.

/// Board cells and marks.
pub mod board;
/// Win and draw detection.
pub mod rules;
/// Game state transitions.
pub mod state;

pub use board::{Board, Cell, Mark};
pub use rules::evaluate_status;
pub use state::{DRAW_LABEL, GameState, GameStatus};
