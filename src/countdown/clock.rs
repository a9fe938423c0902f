//! Wall-clock abstraction for the countdown controller

use chrono::Utc;

/// Source of the current time in milliseconds since the Unix epoch.
///
/// The controller reads the clock on every recompute instead of keeping an
/// incremental counter, so a delayed tick simply observes a larger elapsed
/// delta. Injecting the clock keeps the controller deterministic under test.
pub trait Clock: Send + 'static {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
