//! Reveal timer error types.

use thiserror::Error;

/// Errors that can occur when scheduling the result reveal
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RevealError {
    /// Scheduling needs an ambient tokio runtime
    #[error("No tokio runtime available to schedule the result reveal")]
    NoRuntime,
}
