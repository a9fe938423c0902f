//! Remaining-duration breakdown and formatting

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Time left until the target, decomposed into display components.
///
/// Decomposition uses fixed calendar-free conversions (1 day = 24h =
/// 86,400,000 ms). Invariants: `hours < 24`, `minutes < 60`, `seconds < 60`;
/// `days` is unbounded. A negative delta clamps to the zeroed breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    total_ms: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Remaining {
    /// The elapsed breakdown: all components zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Decompose a signed millisecond delta into display components
    pub fn from_millis(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::zero();
        }
        let ms = delta_ms as u64;
        Self {
            total_ms: ms,
            days: ms / MS_PER_DAY,
            hours: (ms / MS_PER_HOUR) % 24,
            minutes: (ms / MS_PER_MINUTE) % 60,
            seconds: (ms / MS_PER_SECOND) % 60,
        }
    }

    /// Remaining milliseconds, clamped to zero
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// True once the target has passed (or was never in the future)
    pub fn is_elapsed(&self) -> bool {
        self.total_ms == 0
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn days_padded(&self) -> String {
        pad(self.days)
    }

    pub fn hours_padded(&self) -> String {
        pad(self.hours)
    }

    pub fn minutes_padded(&self) -> String {
        pad(self.minutes)
    }

    pub fn seconds_padded(&self) -> String {
        pad(self.seconds)
    }
}

/// Left-pad a component to a minimum width of 2; wider values pass through
pub fn pad(value: u64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_mixed_delta() {
        // 1 day, 1 hour, 1 minute, 1 second, 1 ms
        let remaining = Remaining::from_millis(90_061_001);
        assert_eq!(remaining.days(), 1);
        assert_eq!(remaining.hours(), 1);
        assert_eq!(remaining.minutes(), 1);
        assert_eq!(remaining.seconds(), 1);
        assert_eq!(remaining.total_ms(), 90_061_001);
        assert!(!remaining.is_elapsed());
    }

    #[test]
    fn reconstruction_bound_holds() {
        let deltas: [i64; 8] = [
            0,
            1,
            999,
            1_000,
            59_999,
            86_399_999,
            86_400_000,
            987_654_321_012,
        ];
        for delta in deltas {
            let r = Remaining::from_millis(delta);
            assert!(r.hours() < 24);
            assert!(r.minutes() < 60);
            assert!(r.seconds() < 60);
            let rebuilt = r.days() * MS_PER_DAY
                + r.hours() * MS_PER_HOUR
                + r.minutes() * MS_PER_MINUTE
                + r.seconds() * MS_PER_SECOND;
            assert!(rebuilt <= delta as u64, "delta={delta}");
            assert!(delta as u64 <= rebuilt + 999, "delta={delta}");
        }
    }

    #[test]
    fn sub_second_delta_floors_to_zero_components() {
        let remaining = Remaining::from_millis(500);
        assert_eq!(remaining.seconds(), 0);
        assert_eq!(remaining.total_ms(), 500);
        assert!(!remaining.is_elapsed());
    }

    #[test]
    fn negative_delta_clamps_to_zero() {
        let remaining = Remaining::from_millis(-42_000);
        assert_eq!(remaining, Remaining::zero());
        assert!(remaining.is_elapsed());
        assert_eq!(remaining.days_padded(), "00");
    }

    #[test]
    fn padding_law() {
        for (value, expected) in [(0, "00"), (5, "05"), (59, "59"), (123, "123")] {
            let padded = pad(value);
            assert_eq!(padded, expected);
            assert_eq!(padded.len(), 2.max(value.to_string().len()));
            assert_eq!(padded.parse::<u64>().unwrap(), value);
        }
    }
}
