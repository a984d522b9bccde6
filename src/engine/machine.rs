//! Game engine: the facade the presentation layer drives.

use super::config::GameConfig;
use super::view::{GameStatus, GameView, MoveEntry};
use crate::core::{Board, Outcome, Symbol};
use crate::history::{GameHistory, HistoryError, SnapshotIter, SortOrder};
use crate::reveal::{RevealFlag, RevealPhase, RevealTimer};
use tracing::{debug, error, info, instrument, warn};

/// What happened to a submitted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDisposition {
    /// Move recorded; `outcome` is the new outcome at the cursor
    Applied { symbol: Symbol, outcome: Outcome },
    /// Move rejected and nothing changed
    Ignored(HistoryError),
}

impl MoveDisposition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Tic-tac-toe engine with time-travel.
///
/// Owns the history, the move list order, and the result reveal timer.
/// Every command runs to completion synchronously; the history is
/// replaced wholesale on each change, never edited in place.
///
/// # Example
///
/// ```rust
/// use tictac::core::{Outcome, Symbol};
/// use tictac::engine::GameEngine;
///
/// let mut engine = GameEngine::new();
/// for cell in [0, 4, 1, 3, 2] {
///     engine.submit_move(cell);
/// }
/// assert_eq!(engine.outcome().winner(), Some(Symbol::X));
///
/// // Finished games ignore further moves
/// assert!(!engine.submit_move(8).is_applied());
///
/// // But time-travel can go back to an open position
/// engine.jump_to(2).unwrap();
/// assert_eq!(engine.outcome(), Outcome::InProgress);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    history: GameHistory,
    sort_order: SortOrder,
    reveal: RevealTimer,
    config: GameConfig,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            history: GameHistory::new(),
            sort_order: config.initial_sort_order(),
            reveal: RevealTimer::new(config.reveal_delay()),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Board at the cursor.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Outcome at the cursor (recomputed on every call).
    pub fn outcome(&self) -> Outcome {
        self.history.outcome_at_cursor()
    }

    /// Symbol that would play the next move from the cursor.
    pub fn whose_turn(&self) -> Symbol {
        self.history.next_symbol()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_outcome(self.outcome(), self.whose_turn())
    }

    /// Play the current player's symbol at `cell`.
    ///
    /// Illegal moves (occupied cell, decided game, off-board index) are
    /// ignored: the engine is left exactly as it was.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn submit_move(&mut self, cell: usize) -> MoveDisposition {
        let symbol = self.history.next_symbol();

        match self.history.apply_move(cell, symbol) {
            Ok(next) => {
                self.history = next;
                let outcome = self.outcome();
                debug!(%symbol, cell, moves = self.history.cursor(), "Move applied");
                if outcome.is_terminal() {
                    info!(%outcome, "Game decided");
                }
                self.sync_reveal();
                MoveDisposition::Applied { symbol, outcome }
            }
            Err(err) => {
                debug!(%err, "Move ignored");
                MoveDisposition::Ignored(err)
            }
        }
    }

    /// Move the cursor to `move_number` without discarding anything.
    ///
    /// An out-of-range move number means the caller built its move list
    /// from stale data; it is logged and returned as an error.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        let next = self.history.jump_to(move_number).inspect_err(|err| {
            error!(%err, "Jump outside recorded history");
        })?;
        self.history = next;
        debug!(outcome = %self.outcome(), "Jumped");

        if self.config.clear_reveal_on_rewind() && !self.outcome().is_terminal() {
            self.reveal.cancel();
        }
        self.sync_reveal();
        Ok(())
    }

    /// Start over: fresh history, reveal cancelled and lowered.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = self.history.reset();
        self.reveal.cancel();
        info!("Game reset");
    }

    /// Flip the move list order; returns the new order.
    pub fn toggle_sort_order(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        self.sort_order
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Lazy, restartable listing of every snapshot with its index.
    pub fn snapshot_list(&self, order: SortOrder) -> SnapshotIter<'_> {
        self.history.iter(order)
    }

    /// Move list entries in `order`.
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveEntry> {
        let cursor = self.history.cursor();
        self.snapshot_list(order)
            .map(|(move_number, snapshot)| MoveEntry {
                move_number,
                location: snapshot.location(),
                is_current: move_number == cursor,
            })
            .collect()
    }

    /// Move list entries in the engine's current order.
    pub fn sorted_move_list(&self) -> Vec<MoveEntry> {
        self.move_list(self.sort_order)
    }

    /// Whether the result overlay should be shown.
    pub fn reveal_flag(&self) -> bool {
        self.reveal.is_revealed()
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    /// Read handle on the reveal flag that outlives borrows of the engine.
    pub fn reveal_handle(&self) -> RevealFlag {
        self.reveal.flag()
    }

    /// Snapshot of everything the presentation layer renders.
    pub fn view(&self) -> GameView {
        let outcome = self.outcome();
        GameView {
            board: *self.board(),
            outcome,
            status: self.status(),
            highlighted: outcome
                .winning_line()
                .map(|line| line.to_vec())
                .unwrap_or_default(),
            cursor: self.cursor(),
            sort_order: self.sort_order,
            moves: self.sorted_move_list(),
            revealed: self.reveal_flag(),
        }
    }

    /// Schedule the reveal if the cursor sits on a decided position.
    fn sync_reveal(&mut self) {
        if !self.outcome().is_terminal() {
            return;
        }
        match self.reveal.schedule() {
            Ok(true) => debug!(delay = ?self.reveal.delay(), "Result reveal scheduled"),
            Ok(false) => {}
            Err(err) => warn!(%err, "Result reveal not scheduled"),
        }
    }
}
