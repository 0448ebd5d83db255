//! Board representation: nine cells in row-major order.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Number of cells on a tic-tac-toe board.
pub const CELL_COUNT: usize = 9;

/// Symbol placed by a player. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Label used when persisting a win for this mark.
    pub fn label(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Content of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Occupied by a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Mark stored in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Whether the cell is still free.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 grid. Index `i` maps to row `i / 3`, column `i % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Whether `index` is on the board and still empty.
    pub fn is_free(&self, index: usize) -> bool {
        self.get(index).is_some_and(Cell::is_empty)
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Copy of this board with `mark` written at `index`.
    ///
    /// Returns `None` if the index is off the board or the cell is taken, so
    /// an occupied cell can never be overwritten.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        if !self.is_free(index) {
            return None;
        }
        let mut cells = self.cells;
        cells[index] = Cell::Marked(mark);
        Some(Self { cells })
    }
}

impl fmt::Display for Board {
    /// Renders the grid with free cells shown by their index.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, " {index} ")?,
                    Cell::Marked(mark) => write!(f, " {mark} ")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

/// Failure to read a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[error("expected {CELL_COUNT} cells, got {0}")]
    CellCount(usize),
    /// A character other than `X`, `O`, `_` or `.` was found.
    #[error("unexpected cell character `{0}`")]
    InvalidCell(char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written as `X`, `O` and `_`/`.` for empty.
    /// Whitespace and commas are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Marked(Mark::X)),
                'O' | 'o' => Ok(Cell::Marked(Mark::O)),
                '_' | '.' => Ok(Cell::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = cells.len();
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardParseError::CellCount(count))?;
        Ok(Self { cells })
    }
}
