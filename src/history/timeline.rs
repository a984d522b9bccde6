//! Branching move history with a cursor.
//!
//! History is immutable - every operation returns a new history and
//! leaves the receiver untouched. Branching is modelled as a linear
//! sequence that is truncated at the cursor whenever a new move is
//! played, so abandoned futures are simply dropped.

use super::error::{HistoryError, IllegalMove};
use super::snapshot::HistorySnapshot;
use crate::core::{whose_turn, Board, Location, Outcome, Symbol};
use crate::invariants::{validate_parts, InvalidHistory};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use std::iter::Enumerate;
use std::slice;

/// Order in which snapshots are listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// Ordered snapshots plus the position currently displayed.
///
/// # Example
///
/// ```rust
/// use tictac::core::Symbol;
/// use tictac::history::GameHistory;
///
/// let history = GameHistory::new();
/// let history = history.apply_move(4, Symbol::X).unwrap();
/// let history = history.apply_move(0, Symbol::O).unwrap();
/// assert_eq!(history.len(), 3);
///
/// // Browsing back keeps the future around
/// let rewound = history.jump_to(1).unwrap();
/// assert_eq!(rewound.len(), 3);
///
/// // A new move from the past discards it
/// let branched = rewound.apply_move(8, Symbol::O).unwrap();
/// assert_eq!(branched.len(), 3);
/// assert_eq!(branched.cursor(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HistoryParts")]
pub struct GameHistory {
    snapshots: Vec<HistorySnapshot>,
    cursor: usize,
}

/// Unchecked wire form; only becomes a `GameHistory` once validated.
#[derive(Deserialize)]
struct HistoryParts {
    snapshots: Vec<HistorySnapshot>,
    cursor: usize,
}

impl TryFrom<HistoryParts> for GameHistory {
    type Error = InvalidHistory;

    fn try_from(parts: HistoryParts) -> Result<Self, Self::Error> {
        match validate_parts(&parts.snapshots, parts.cursor) {
            Validation::Success(_) => Ok(Self {
                snapshots: parts.snapshots,
                cursor: parts.cursor,
            }),
            Validation::Failure(errors) => Err(InvalidHistory {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// Create a fresh history: one empty snapshot, cursor at 0.
    pub fn new() -> Self {
        Self {
            snapshots: vec![HistorySnapshot::initial()],
            cursor: 0,
        }
    }

    /// Build a history from raw parts without checking anything.
    ///
    /// Used to exercise invariant checks against corrupted histories.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<HistorySnapshot>, cursor: usize) -> Self {
        Self { snapshots, cursor }
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &HistorySnapshot {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true; a history always holds its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[HistorySnapshot] {
        &self.snapshots
    }

    /// Whether the cursor points at the most recent snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// Outcome of the board at the cursor.
    pub fn outcome_at_cursor(&self) -> Outcome {
        self.current().outcome()
    }

    /// Symbol of the next move from the cursor.
    pub fn next_symbol(&self) -> Symbol {
        whose_turn(self.cursor)
    }

    /// Check whether `symbol` may play `index` from the cursor.
    ///
    /// Pure predicate; shares its rules with [`GameHistory::apply_move`].
    pub fn check_move(&self, index: usize, symbol: Symbol) -> Result<(), IllegalMove> {
        let outcome = self.outcome_at_cursor();
        if outcome.is_terminal() {
            return Err(IllegalMove::GameDecided { outcome });
        }

        let board = self.current().board();
        match board.get(index) {
            None => return Err(IllegalMove::OutOfBounds { index }),
            Some(cell) if !cell.is_empty() => return Err(IllegalMove::CellOccupied { index }),
            Some(_) => {}
        }

        let expected = self.next_symbol();
        if symbol != expected {
            return Err(IllegalMove::WrongTurn {
                expected,
                found: symbol,
            });
        }

        Ok(())
    }

    /// Play `symbol` at `index`, returning a new history.
    ///
    /// Snapshots after the cursor are discarded, the new snapshot is
    /// appended, and the cursor moves onto it. On error nothing changes.
    pub fn apply_move(&self, index: usize, symbol: Symbol) -> Result<Self, HistoryError> {
        self.check_move(index, symbol)?;

        let location =
            Location::from_index(index).ok_or(IllegalMove::OutOfBounds { index })?;
        let board: Board = self.current().board().with_symbol(index, symbol);

        let mut snapshots = self.snapshots[..=self.cursor].to_vec();
        snapshots.push(HistorySnapshot::after_move(board, location));
        let cursor = snapshots.len() - 1;

        Ok(Self { snapshots, cursor })
    }

    /// Move the cursor to snapshot `index`, returning a new history.
    ///
    /// Snapshots are never added or removed by a jump.
    pub fn jump_to(&self, index: usize) -> Result<Self, HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::IndexOutOfRange {
                requested: index,
                len: self.snapshots.len(),
            });
        }

        Ok(Self {
            snapshots: self.snapshots.clone(),
            cursor: index,
        })
    }

    /// A fresh history, regardless of this one's contents.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Lazily iterate `(index, snapshot)` pairs in `order`.
    ///
    /// The iterator is `Clone`, so a listing can be restarted cheaply.
    pub fn iter(&self, order: SortOrder) -> SnapshotIter<'_> {
        SnapshotIter {
            inner: self.snapshots.iter().enumerate(),
            order,
        }
    }
}

/// Iterator over indexed snapshots, ascending or descending.
#[derive(Clone, Debug)]
pub struct SnapshotIter<'a> {
    inner: Enumerate<slice::Iter<'a, HistorySnapshot>>,
    order: SortOrder,
}

impl<'a> Iterator for SnapshotIter<'a> {
    type Item = (usize, &'a HistorySnapshot);

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            SortOrder::Ascending => self.inner.next(),
            SortOrder::Descending => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SnapshotIter<'_> {}
