//! Invariant violation errors.

use crate::core::Symbol;
use thiserror::Error;

/// A single broken history invariant
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("History has no snapshots")]
    EmptyHistory,

    #[error("Initial snapshot must be an empty board with no location")]
    InitialNotEmpty,

    #[error("Cursor {cursor} outside history of length {len}")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("Snapshot {snapshot} changes {changed} cells (expected exactly 1)")]
    NotSingleCellChange { snapshot: usize, changed: usize },

    #[error("Snapshot {snapshot} overwrites occupied cell {cell}")]
    CellOverwritten { snapshot: usize, cell: usize },

    #[error("Snapshot {snapshot} places {found:?} (expected {expected})")]
    WrongSymbol {
        snapshot: usize,
        expected: Symbol,
        found: Option<Symbol>,
    },

    #[error("Snapshot {snapshot} records the wrong move location")]
    LocationMismatch { snapshot: usize },

    #[error("Snapshot {snapshot} follows a decided game")]
    MoveAfterDecision { snapshot: usize },
}

/// Rejected history, carrying every violation found
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("History failed {} invariant check(s): {}", .violations.len(), summary(.violations))]
pub struct InvalidHistory {
    pub violations: Vec<InvariantViolation>,
}

fn summary(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
