//! Read-only data handed to the presentation layer.

use crate::core::{Board, Location, Outcome, Symbol};
use crate::history::SortOrder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the jump-to move list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub move_number: usize,
    pub location: Option<Location>,
    /// The entry at the cursor; rendered as plain text, not a button.
    pub is_current: bool,
}

impl MoveEntry {
    /// Text shown for this entry.
    ///
    /// ```rust
    /// use tictac::core::Location;
    /// use tictac::engine::MoveEntry;
    ///
    /// let entry = MoveEntry {
    ///     move_number: 3,
    ///     location: Location::from_index(7),
    ///     is_current: false,
    /// };
    /// assert_eq!(entry.label(), "Go to move #3 (2, 1)");
    /// ```
    pub fn label(&self) -> String {
        if self.is_current {
            return format!("You are at move #{}", self.move_number);
        }
        match (self.move_number, self.location) {
            (0, _) | (_, None) => "Go to game start".to_string(),
            (n, Some(location)) => format!("Go to move #{n} {location}"),
        }
    }
}

/// Status line for the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    NextPlayer(Symbol),
    Winner(Symbol),
    Draw,
}

impl GameStatus {
    pub fn from_outcome(outcome: Outcome, next: Symbol) -> Self {
        match outcome {
            Outcome::InProgress => Self::NextPlayer(next),
            Outcome::Winner { symbol, .. } => Self::Winner(symbol),
            Outcome::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NextPlayer(symbol) => write!(f, "Next player: {symbol}"),
            Self::Winner(symbol) => write!(f, "Winner: {symbol}"),
            Self::Draw => f.write_str("Draw!"),
        }
    }
}

/// Everything needed to render one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub board: Board,
    pub outcome: Outcome,
    pub status: GameStatus,
    /// Winning line cells, empty unless someone has won.
    pub highlighted: Vec<usize>,
    pub cursor: usize,
    pub sort_order: SortOrder,
    pub moves: Vec<MoveEntry>,
    pub revealed: bool,
}
