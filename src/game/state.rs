//! Immutable game state and its single transition function.

use tracing::debug;

use super::{
    board::{Board, Mark},
    rules::evaluate_status,
};

/// Label persisted when a game ends without a winner.
pub const DRAW_LABEL: &str = "draw";

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// The board filled up without a completed line.
    Draw,
}

impl GameStatus {
    /// Terminal statuses accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Label to persist for a finished game, `None` while in progress.
    pub fn result_label(self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(mark.label()),
            GameStatus::Draw => Some(DRAW_LABEL),
        }
    }
}

/// Snapshot of one game instance.
///
/// Values are never mutated in place: [`GameState::apply_move`] and
/// [`GameState::reset`] hand back the next snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    next: Mark,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::reset()
    }
}

impl GameState {
    /// Fresh game: empty board, `X` to move.
    pub fn reset() -> Self {
        Self {
            board: Board::new(),
            next: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that plays the next accepted move.
    pub fn next_player(&self) -> Mark {
        self.next
    }

    /// Status derived after the last accepted move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has finished.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Label to persist for this game once it is over.
    pub fn winner_label(&self) -> Option<&'static str> {
        self.status.result_label()
    }

    /// Play the current player's mark at `index`.
    ///
    /// Moves on an occupied or off-board cell, or after the game is over,
    /// are ignored and the state is returned unchanged.
    pub fn apply_move(&self, index: usize) -> Self {
        if self.is_over() {
            debug!(index, status = ?self.status, "move ignored: game is over");
            return *self;
        }

        let Some(board) = self.board.with_mark(index, self.next) else {
            debug!(index, "move ignored: cell unavailable");
            return *self;
        };

        Self {
            board,
            next: self.next.opponent(),
            status: evaluate_status(&board),
        }
    }

    /// One-line description of the game for display.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Next player: {}", self.next),
            GameStatus::Won(mark) => format!("{mark} wins!"),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }
}
