//! Board representation.
//!
//! A board is a fixed, row-major grid of nine cells. Boards are plain
//! values: the only way to "change" one is to build a new board from an
//! existing one with a single cell filled in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two player symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Always moves first.
    X,
    /// Moves second.
    O,
}

impl Symbol {
    /// The other player's symbol.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupant of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Symbol),
}

impl Cell {
    /// Symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Empty => None,
            Self::Occupied(symbol) => Some(symbol),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Where a move was played, as a `(row, col)` pair in `0..3`.
///
/// # Example
///
/// ```rust
/// use tictac::core::Location;
///
/// let location = Location::from_index(5).unwrap();
/// assert_eq!((location.row(), location.col()), (1, 2));
/// assert_eq!(location.index(), 5);
/// assert_eq!(location.to_string(), "(1, 2)");
/// assert!(Location::from_index(9).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    row: usize,
    col: usize,
}

impl Location {
    /// Location of a cell index, or `None` when the index is off the board.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Board::CELLS).then(|| Self {
            row: index / Board::SIDE,
            col: index % Board::SIDE,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major cell index of this location.
    pub fn index(&self) -> usize {
        self.row * Board::SIDE + self.col
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 board, cells in row-major order (index = row * 3 + col).
///
/// # Example
///
/// ```rust
/// use tictac::core::{Board, Cell, Symbol};
///
/// let empty = Board::new();
/// let board = empty.with_symbol(4, Symbol::X);
///
/// assert_eq!(board.get(4), Some(Cell::Occupied(Symbol::X)));
/// assert!(empty.is_empty(4)); // Original unchanged
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; Board::CELLS],
}

impl Board {
    /// Number of cells on a board.
    pub const CELLS: usize = 9;
    /// Cells per row and per column.
    pub const SIDE: usize = 3;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::CELLS],
        }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Whether the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    pub fn cells(&self) -> &[Cell; Board::CELLS] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns a new board equal to this one with `index` set to `symbol`.
    ///
    /// Callers check legality first: `index` must be on the board and the
    /// cell must be empty. This is a construction step, not a rule check.
    pub fn with_symbol(&self, index: usize, symbol: Symbol) -> Self {
        debug_assert!(
            self.is_empty(index),
            "with_symbol requires an empty cell on the board (index {index})"
        );
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(symbol);
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(Self::SIDE).enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str("|")?;
                }
                match cell.symbol() {
                    Some(symbol) => write!(f, "{symbol}")?,
                    None => f.write_str(" ")?,
                }
            }
        }
        Ok(())
    }
}
