use chrono::{Duration, Utc};
use meridian_core::Timestamp;
use meridian_ports::Clock;
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock frozen at an explicit instant
///
/// Time only moves through [`advance`](Self::advance) or
/// [`set_time`](Self::set_time). Clones share the same instant, so a test can
/// keep one handle while the registry holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<RwLock<Timestamp>>,
}

impl ManualClock {
    /// Create a clock pinned at `time`
    pub fn at(time: Timestamp) -> Self {
        Self {
            current: Arc::new(RwLock::new(time)),
        }
    }

    /// Create a clock pinned at the current wall time
    pub fn frozen() -> Self {
        Self::at(Utc::now())
    }

    /// Move the pinned instant forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.write();
        *current += duration;
    }

    /// Jump to an explicit instant
    pub fn set_time(&self, time: Timestamp) {
        *self.current.write() = time;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::frozen()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    #[test]
    fn test_frozen_time_does_not_advance() {
        let clock = ManualClock::frozen();
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let t2 = clock.now();
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_advance_time() {
        let clock = ManualClock::frozen();
        let t1 = clock.now();
        clock.advance(Duration::seconds(60));
        let t2 = clock.now();
        assert_eq!((t2 - t1).num_seconds(), 60);
    }

    #[test]
    fn test_set_time() {
        let clock = ManualClock::at(Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap());
        let target = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        clock.set_time(target);

        assert_eq!(clock.now(), target);
    }

    #[test]
    fn test_clone_shares_state() {
        let clock1 = ManualClock::frozen();
        let clock2 = clock1.clone();

        clock1.advance(Duration::seconds(100));

        assert_eq!(clock1.now(), clock2.now());
    }
}
