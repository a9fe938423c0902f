//! Countdown controller state and tick computation

use chrono::{DateTime, Utc};

use super::clock::{Clock, SystemClock};
use super::remaining::Remaining;

/// One-shot notification consumed on the tick that crosses the target
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Countdown state for a fixed launch instant.
///
/// The target is immutable for the lifetime of the controller; restarting
/// with a different target means constructing a new controller. Construction
/// performs no side effects, so the breakdown is all zeros until the first
/// [`recompute`](Self::recompute). A target already in the past is not an
/// error: the first recompute reports the zeroed breakdown and signals
/// completion.
pub struct CountdownController<C: Clock = SystemClock> {
    clock: C,
    target_ms: i64,
    remaining: Remaining,
    complete: bool,
    on_complete: Option<CompletionCallback>,
}

impl CountdownController<SystemClock> {
    /// Create a controller counting down to `target` on the system clock
    pub fn new(target: DateTime<Utc>) -> Self {
        Self::with_clock(SystemClock, target.timestamp_millis())
    }
}

impl<C: Clock> CountdownController<C> {
    /// Create a controller with an explicit clock and target in epoch milliseconds
    pub fn with_clock(clock: C, target_ms: i64) -> Self {
        Self {
            clock,
            target_ms,
            remaining: Remaining::zero(),
            complete: false,
            on_complete: None,
        }
    }

    /// Attach a callback invoked exactly once when the target passes
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Recompute the remaining breakdown from the clock.
    ///
    /// On the first tick where the target has passed, the completion flag is
    /// set and the callback fires; the flag never reverts and later ticks
    /// keep reporting the zeroed breakdown without re-firing.
    pub fn recompute(&mut self) -> &Remaining {
        let delta = self.target_ms.saturating_sub(self.clock.now_ms());
        self.remaining = Remaining::from_millis(delta);

        if self.remaining.is_elapsed() && !self.complete {
            self.complete = true;
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
        }

        &self.remaining
    }

    /// Breakdown from the most recent recompute
    pub fn remaining(&self) -> &Remaining {
        &self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }
}
