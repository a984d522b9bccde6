//! Engine facade around the pure core.
//!
//! This module is the "imperative shell": it owns the current history,
//! the move list order, and the reveal timer, and it turns presentation
//! commands into history transitions.
//!
//! # Key Concepts
//!
//! - **Commands**: `submit_move`, `jump_to`, `reset`, `toggle_sort_order`
//! - **Queries**: board, outcome, status, move list and reveal flag
//! - **Views**: a serializable [`GameView`] bundling all queries

mod config;
mod machine;
mod view;

pub use config::{ConfigError, GameConfig, GameConfigBuilder};
pub use machine::{GameEngine, MoveDisposition};
pub use view::{GameStatus, GameView, MoveEntry};
