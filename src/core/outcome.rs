//! Win and draw detection.
//!
//! The outcome of a game is never stored. It is recomputed from a board
//! whenever it is needed, so it can never go stale.

use super::board::{Board, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight winning lines, in the order they are tested.
///
/// Rows first, then columns, then the two diagonals. The first matching
/// line decides the winner.
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

/// Result of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    InProgress,
    /// `symbol` completed `line`.
    Winner { symbol: Symbol, line: [usize; 3] },
    /// Board full, no line completed.
    Draw,
}

impl Outcome {
    /// Winner or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Self::Winner { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Self::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether the cell at `index` is part of the winning line.
    pub fn highlights(&self, index: usize) -> bool {
        self.winning_line()
            .is_some_and(|line| line.contains(&index))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("In progress"),
            Self::Winner { symbol, .. } => write!(f, "Winner: {symbol}"),
            Self::Draw => f.write_str("Draw!"),
        }
    }
}

/// Evaluates a board.
///
/// Pure and deterministic: tests [`WINNING_LINES`] in order and returns
/// the first line whose three cells hold the same symbol. With no line,
/// a full board is a draw and anything else is still in progress.
///
/// # Example
///
/// ```rust
/// use tictac::core::{evaluate, Board, Outcome, Symbol};
///
/// let board = Board::new()
///     .with_symbol(0, Symbol::X)
///     .with_symbol(4, Symbol::X)
///     .with_symbol(8, Symbol::X);
///
/// assert_eq!(
///     evaluate(&board),
///     Outcome::Winner { symbol: Symbol::X, line: [0, 4, 8] }
/// );
/// assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
/// ```
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();

    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(symbol) = cells[a].symbol() {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Outcome::Winner { symbol, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
