//! History invariant checks using Validation.

use crate::core::{placed_at, Board, Location};
use crate::history::{GameHistory, HistorySnapshot};
use crate::invariants::violations::InvariantViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<InvariantViolation>>;

fn check(holds: bool, violation: impl FnOnce() -> InvariantViolation) -> Check {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Validate every invariant of `history`, accumulating ALL violations.
///
/// Histories built through the public API always pass. Failures can only
/// come from histories assembled some other way, e.g. deserialized input.
pub fn validate_history(history: &GameHistory) -> Check {
    validate_parts(history.snapshots(), history.cursor())
}

pub(crate) fn validate_parts(snapshots: &[HistorySnapshot], cursor: usize) -> Check {
    let Some(first) = snapshots.first() else {
        return Validation::fail(InvariantViolation::EmptyHistory);
    };

    let mut checks: Vec<Check> = Vec::new();

    checks.push(check(
        first.location().is_none() && *first.board() == Board::new(),
        || InvariantViolation::InitialNotEmpty,
    ));

    checks.push(check(cursor < snapshots.len(), || {
        InvariantViolation::CursorOutOfRange {
            cursor,
            len: snapshots.len(),
        }
    }));

    for (snapshot, pair) in snapshots.windows(2).enumerate() {
        checks.extend(check_step(snapshot + 1, &pair[0], &pair[1]));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Checks for the move that turned `prev` into `next` (snapshot `snapshot`).
fn check_step(snapshot: usize, prev: &HistorySnapshot, next: &HistorySnapshot) -> Vec<Check> {
    let mut checks = vec![check(!prev.outcome().is_terminal(), || {
        InvariantViolation::MoveAfterDecision { snapshot }
    })];

    let before = prev.board().cells();
    let after = next.board().cells();
    let changed: Vec<usize> = (0..Board::CELLS)
        .filter(|&i| before[i] != after[i])
        .collect();

    let &[cell] = changed.as_slice() else {
        checks.push(Validation::fail(InvariantViolation::NotSingleCellChange {
            snapshot,
            changed: changed.len(),
        }));
        return checks;
    };

    checks.push(check(before[cell].is_empty(), || {
        InvariantViolation::CellOverwritten { snapshot, cell }
    }));

    if let Some(expected) = placed_at(snapshot) {
        let found = after[cell].symbol();
        checks.push(check(found == Some(expected), || {
            InvariantViolation::WrongSymbol {
                snapshot,
                expected,
                found,
            }
        }));
    }

    checks.push(check(next.location() == Location::from_index(cell), || {
        InvariantViolation::LocationMismatch { snapshot }
    }));

    checks
}
