//! Immutable history snapshots.

use crate::core::{evaluate, Board, Location, Outcome};
use serde::{Deserialize, Serialize};

/// A board state plus the move that produced it.
///
/// Snapshots are immutable values. A new move never edits an existing
/// snapshot; it produces a new one.
///
/// # Example
///
/// ```rust
/// use tictac::history::HistorySnapshot;
///
/// let initial = HistorySnapshot::initial();
/// assert!(initial.location().is_none());
/// assert_eq!(initial.board().occupied_count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistorySnapshot {
    board: Board,
    location: Option<Location>,
}

impl HistorySnapshot {
    /// The snapshot every game starts from: empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    pub(crate) fn after_move(board: Board, location: Location) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the producing move was played. `None` for the initial snapshot.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Outcome of this snapshot's board (derived, never cached).
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }
}

impl Default for HistorySnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
