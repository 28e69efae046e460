use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Manually applied shift added to a clock's real local time
///
/// Stored as whole minutes so that it always splits into hours and minutes
/// carrying the same sign: `-90` minutes is `(-1, -30)`, never `(-2, 30)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ManualOffset {
    total_minutes: i64,
}

impl ManualOffset {
    pub const ZERO: ManualOffset = ManualOffset { total_minutes: 0 };

    /// Build an offset from signed hour and minute parts
    ///
    /// The parts may disagree in sign (`1h -30m` is 30 minutes) and are not
    /// range checked. Magnitudes past `i64` saturate.
    pub fn new(hours: i64, minutes: i64) -> Self {
        Self {
            total_minutes: hours.saturating_mul(60).saturating_add(minutes),
        }
    }

    pub fn from_minutes(total_minutes: i64) -> Self {
        Self { total_minutes }
    }

    pub fn total_minutes(&self) -> i64 {
        self.total_minutes
    }

    /// Whole-hour part, truncated toward zero
    pub fn hours(&self) -> i64 {
        self.total_minutes / 60
    }

    /// Remaining minutes, same sign as the offset
    pub fn minutes(&self) -> i64 {
        self.total_minutes % 60
    }

    pub fn is_zero(&self) -> bool {
        self.total_minutes == 0
    }

    /// Offset as a chrono duration, `None` if it exceeds chrono's range
    pub fn to_duration(&self) -> Option<Duration> {
        Duration::try_minutes(self.total_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_decomposition() {
        let offset = ManualOffset::new(2, 45);
        assert_eq!(offset.total_minutes(), 165);
        assert_eq!(offset.hours(), 2);
        assert_eq!(offset.minutes(), 45);
    }

    #[test]
    fn test_negative_decomposition_is_sign_consistent() {
        let offset = ManualOffset::new(-1, -30);
        assert_eq!(offset.hours(), -1);
        assert_eq!(offset.minutes(), -30);

        let offset = ManualOffset::from_minutes(-45);
        assert_eq!(offset.hours(), 0);
        assert_eq!(offset.minutes(), -45);
    }

    #[test]
    fn test_mixed_sign_parts_are_summed() {
        let offset = ManualOffset::new(1, -30);
        assert_eq!(offset.total_minutes(), 30);
        assert_eq!(offset.hours(), 0);
        assert_eq!(offset.minutes(), 30);
    }

    #[test]
    fn test_zero() {
        assert!(ManualOffset::default().is_zero());
        assert!(ManualOffset::new(1, -60).is_zero());
        assert_eq!(ManualOffset::ZERO.to_duration(), Some(Duration::zero()));
    }

    #[test]
    fn test_huge_offset_saturates() {
        let offset = ManualOffset::new(i64::MAX, 10);
        assert_eq!(offset.total_minutes(), i64::MAX);
        assert!(offset.to_duration().is_none());
    }
}
