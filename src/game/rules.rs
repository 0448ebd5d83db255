//! Win and draw detection.

use super::{
    board::{Board, Cell},
    state::GameStatus,
};

/// The eight winning triples, checked rows first, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Derive the status of `board` without looking at whose turn it is.
///
/// A completed line wins even when the board is full; a full board without a
/// line is a draw; anything else is still in progress.
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some(mark) = winning_line(board).and_then(|[a, _, _]| board.cells()[a].mark()) {
        return GameStatus::Won(mark);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// First line in [`WINNING_LINES`] holding three identical marks.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}
