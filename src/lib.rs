//! Tictac: a pure functional tic-tac-toe state machine
//!
//! Tictac follows the "pure core, imperative shell" philosophy. Boards,
//! outcomes and history are immutable values transformed by pure
//! functions; the engine is a thin shell that swaps in new values and
//! drives the one asynchronous piece, the deferred result reveal.
//!
//! # Core Concepts
//!
//! - **Board**: nine cells, replaced rather than mutated
//! - **Outcome**: derived from a board on every read, never stored
//! - **History**: snapshots plus a cursor, truncated when a move is
//!   played from the past
//! - **Engine**: commands and queries for a presentation layer
//!
//! # Example
//!
//! ```rust
//! use tictac::core::{Outcome, Symbol};
//! use tictac::engine::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 1, 4, 3, 8] {
//!     engine.submit_move(cell);
//! }
//! assert_eq!(
//!     engine.outcome(),
//!     Outcome::Winner { symbol: Symbol::X, line: [0, 4, 8] }
//! );
//!
//! // Rewind and branch: the two undone moves are discarded
//! engine.jump_to(2).unwrap();
//! engine.submit_move(2);
//! assert_eq!(engine.history().len(), 4);
//! ```

pub mod core;
pub mod engine;
pub mod history;
pub mod invariants;
pub mod reveal;

// Re-export commonly used types
pub use self::core::{evaluate, whose_turn, Board, Cell, Location, Outcome, Symbol};
pub use engine::{GameConfig, GameEngine, GameView, MoveDisposition, MoveEntry};
pub use history::{GameHistory, HistoryError, HistorySnapshot, IllegalMove, SortOrder};
pub use reveal::{RevealPhase, RevealTimer};
