//! Core game types and rules.
//!
//! This module contains the pure functional core of the game:
//! - Board, cell and location values
//! - Win and draw detection
//! - Turn order derived from a history position
//!
//! Nothing in this module has side effects.

mod board;
mod outcome;
mod turn;

pub use board::{Board, Cell, Location, Symbol};
pub use outcome::{evaluate, Outcome, WINNING_LINES};
pub use turn::{placed_at, whose_turn};
