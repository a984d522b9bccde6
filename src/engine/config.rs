//! Engine configuration.

use crate::history::SortOrder;
use crate::reveal::DEFAULT_REVEAL_DELAY;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a [`GameEngine`](super::GameEngine).
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tictac::engine::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "reveal_delay_ms": 500 }"#).unwrap();
/// assert_eq!(config.reveal_delay(), Duration::from_millis(500));
/// assert!(!config.clear_reveal_on_rewind());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    reveal_delay_ms: u64,
    initial_sort_order: SortOrder,
    clear_reveal_on_rewind: bool,
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Delay between a terminal outcome and the result reveal.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn initial_sort_order(&self) -> SortOrder {
        self.initial_sort_order
    }

    /// Whether jumping back to an undecided position lowers the reveal flag.
    pub fn clear_reveal_on_rewind(&self) -> bool {
        self.clear_reveal_on_rewind
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY.as_millis() as u64,
            initial_sort_order: SortOrder::Ascending,
            clear_reveal_on_rewind: false,
        }
    }
}

/// Builder for [`GameConfig`]
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reveal delay (millisecond precision)
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.config.reveal_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the move list order the engine starts with
    pub fn initial_sort_order(mut self, order: SortOrder) -> Self {
        self.config.initial_sort_order = order;
        self
    }

    /// Lower the reveal flag when time-travel leaves a decided position
    pub fn clear_reveal_on_rewind(mut self, clear: bool) -> Self {
        self.config.clear_reveal_on_rewind = clear;
        self
    }

    pub fn build(self) -> GameConfig {
        self.config
    }
}
