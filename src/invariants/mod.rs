//! Structural invariants of a game history.
//!
//! Checks use Stillwater's `Validation` type so that every broken
//! invariant is reported at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use tictac::history::GameHistory;
//! use tictac::invariants::validate_history;
//!
//! let history = GameHistory::new().apply_move(4, tictac::core::Symbol::X).unwrap();
//! assert!(validate_history(&history).is_success());
//! ```

pub mod rules;
pub mod violations;

pub(crate) use rules::validate_parts;
pub use rules::validate_history;
pub use violations::{InvalidHistory, InvariantViolation};
