//! Branching game history.
//!
//! - Immutable snapshots of each board state
//! - A cursor-based history supporting time-travel
//! - Truncate-on-write branching when a move is played from the past

mod error;
mod snapshot;
mod timeline;

pub use error::{HistoryError, IllegalMove};
pub use snapshot::HistorySnapshot;
pub use timeline::{GameHistory, SnapshotIter, SortOrder};
