//! Deferred result reveal.
//!
//! When a game reaches a terminal outcome the presentation layer shows a
//! result overlay, but only after a short delay. This module owns that
//! one-shot delay: a single tokio task that sleeps and then raises a flag.
//!
//! The flag and the task's identity share one atomic word:
//! `(epoch << 1) | fired`. Cancelling bumps the epoch, so a task from an
//! earlier epoch can never raise the flag after a reset.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

pub mod error;

pub use error::RevealError;

/// Default delay between a terminal outcome and the reveal.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(300);

const FIRED: u64 = 1;

/// Lifecycle of the reveal for the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealPhase {
    /// Nothing scheduled
    Idle,
    /// Timer running, flag not yet raised
    Pending,
    /// Flag raised
    Fired,
}

/// Read-only handle on the reveal flag, for the presentation layer.
#[derive(Clone, Debug)]
pub struct RevealFlag {
    state: Arc<AtomicU64>,
}

impl RevealFlag {
    /// Whether the result overlay should be shown.
    pub fn is_set(&self) -> bool {
        self.state.load(Ordering::Acquire) & FIRED == FIRED
    }
}

/// One-shot delayed reveal.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tictac::reveal::{RevealPhase, RevealTimer};
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let mut timer = RevealTimer::new(Duration::from_millis(300));
/// assert!(timer.schedule().unwrap());
/// assert_eq!(timer.phase(), RevealPhase::Pending);
///
/// tokio::time::sleep(Duration::from_millis(301)).await;
/// assert_eq!(timer.phase(), RevealPhase::Fired);
/// # }
/// ```
#[derive(Debug)]
pub struct RevealTimer {
    delay: Duration,
    state: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl RevealTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_revealed(&self) -> bool {
        self.state.load(Ordering::Acquire) & FIRED == FIRED
    }

    /// A clonable read handle on the flag.
    pub fn flag(&self) -> RevealFlag {
        RevealFlag {
            state: Arc::clone(&self.state),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        if self.is_revealed() {
            RevealPhase::Fired
        } else if self.pending.as_ref().is_some_and(|task| !task.is_finished()) {
            RevealPhase::Pending
        } else {
            RevealPhase::Idle
        }
    }

    /// Start the delay if nothing is pending or fired yet.
    ///
    /// Returns `Ok(false)` when the call was a no-op. Requires an ambient
    /// tokio runtime.
    pub fn schedule(&mut self) -> Result<bool, RevealError> {
        if self.phase() != RevealPhase::Idle {
            return Ok(false);
        }

        let runtime = Handle::try_current().map_err(|_| RevealError::NoRuntime)?;
        let state = Arc::clone(&self.state);
        let armed = self.state.load(Ordering::Acquire) & !FIRED;
        let delay = self.delay;

        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let raised = state
                .compare_exchange(armed, armed | FIRED, Ordering::AcqRel, Ordering::Acquire)
                .is_ok();
            debug!(raised, "Result reveal timer elapsed");
        }));

        Ok(true)
    }

    /// Abort any pending delay and lower the flag.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
        let epoch = self.state.load(Ordering::Acquire) >> 1;
        self.state.store((epoch + 1) << 1, Ordering::Release);
    }
}

impl Default for RevealTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_DELAY)
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle() {
        let timer = RevealTimer::default();
        assert_eq!(timer.phase(), RevealPhase::Idle);
        assert_eq!(timer.delay(), DEFAULT_REVEAL_DELAY);
        assert!(!timer.is_revealed());
    }

    #[test]
    fn schedule_without_runtime_fails() {
        let mut timer = RevealTimer::default();
        assert_eq!(timer.schedule(), Err(RevealError::NoRuntime));
        assert_eq!(timer.phase(), RevealPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let mut timer = RevealTimer::new(Duration::from_millis(300));
        assert_eq!(timer.schedule(), Ok(true));

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(timer.phase(), RevealPhase::Pending);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(timer.phase(), RevealPhase::Fired);
        assert!(timer.flag().is_set());
    }

    #[tokio::test(start_paused = true)]
    async fn schedule_is_noop_while_pending_or_fired() {
        let mut timer = RevealTimer::new(Duration::from_millis(300));
        assert_eq!(timer.schedule(), Ok(true));
        assert_eq!(timer.schedule(), Ok(false));

        tokio::time::sleep(Duration::from_millis(301)).await;
        assert_eq!(timer.schedule(), Ok(false));
        assert_eq!(timer.phase(), RevealPhase::Fired);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_pending_reveal() {
        let mut timer = RevealTimer::new(Duration::from_millis(300));
        let flag = timer.flag();
        timer.schedule().unwrap();

        timer.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(timer.phase(), RevealPhase::Idle);
        assert!(!flag.is_set());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_clears_fired_flag_and_allows_rescheduling() {
        let mut timer = RevealTimer::new(Duration::from_millis(300));
        timer.schedule().unwrap();
        tokio::time::sleep(Duration::from_millis(301)).await;
        assert!(timer.is_revealed());

        timer.cancel();
        assert_eq!(timer.phase(), RevealPhase::Idle);

        assert_eq!(timer.schedule(), Ok(true));
        tokio::time::sleep(Duration::from_millis(301)).await;
        assert!(timer.is_revealed());
    }
}
