//! History error types.

use crate::core::{Outcome, Symbol};
use thiserror::Error;

/// Reasons a move cannot be applied at the current history position.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("Game already decided at this position ({outcome})")]
    GameDecided { outcome: Outcome },

    #[error("Cell index {index} is off the board")]
    OutOfBounds { index: usize },

    #[error("It is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Symbol, found: Symbol },
}

/// Errors returned by history operations
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// Move rejected; the history is unchanged
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    /// Jump target outside the recorded snapshots
    #[error("Move {requested} out of range (history has {len} snapshots)")]
    IndexOutOfRange { requested: usize, len: usize },
}
