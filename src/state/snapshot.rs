//! Serializable countdown read surface

use serde::{Deserialize, Serialize};

use crate::countdown::Remaining;

/// One published view of the countdown: padded strings for display, raw
/// numbers for callers that need arithmetic (pluralization, live-region
/// text), and the completion flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub days_numeric: u64,
    pub hours_numeric: u64,
    pub minutes_numeric: u64,
    pub seconds_numeric: u64,
    pub is_complete: bool,
}

impl CountdownSnapshot {
    /// Build a snapshot from a computed breakdown and the completion flag
    pub fn new(remaining: &Remaining, is_complete: bool) -> Self {
        Self {
            days: remaining.days_padded(),
            hours: remaining.hours_padded(),
            minutes: remaining.minutes_padded(),
            seconds: remaining.seconds_padded(),
            days_numeric: remaining.days(),
            hours_numeric: remaining.hours(),
            minutes_numeric: remaining.minutes(),
            seconds_numeric: remaining.seconds(),
            is_complete,
        }
    }
}

impl Default for CountdownSnapshot {
    /// Zeroed, not-yet-complete placeholder shown before the first tick
    fn default() -> Self {
        Self::new(&Remaining::zero(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_carries_padded_and_numeric_views() {
        let remaining = Remaining::from_millis(90_061_001);
        let snapshot = CountdownSnapshot::new(&remaining, false);

        assert_eq!(snapshot.days, "01");
        assert_eq!(snapshot.seconds, "01");
        assert_eq!(snapshot.days_numeric, 1);
        assert_eq!(snapshot.seconds_numeric, 1);
        assert!(!snapshot.is_complete);
    }

    #[test]
    fn large_day_counts_are_not_truncated() {
        // 123 days
        let remaining = Remaining::from_millis(123 * 86_400_000);
        let snapshot = CountdownSnapshot::new(&remaining, false);
        assert_eq!(snapshot.days, "123");
        assert_eq!(snapshot.days_numeric, 123);
    }

    #[test]
    fn default_is_the_pending_placeholder() {
        let snapshot = CountdownSnapshot::default();
        assert_eq!(snapshot.days, "00");
        assert_eq!(snapshot.seconds, "00");
        assert!(!snapshot.is_complete);
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let snapshot = CountdownSnapshot::new(&Remaining::from_millis(61_000), true);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["minutes"], "01");
        assert_eq!(value["seconds"], "01");
        assert_eq!(value["minutes_numeric"], 1);
        assert_eq!(value["is_complete"], true);
    }
}
