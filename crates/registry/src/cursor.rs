use log::debug;

use crate::record::ClockRecord;
use crate::ring::ClockRing;

/// The "currently viewed" position in a ring
///
/// Owned by whoever drives navigation (a request session, a test) and passed
/// to the ring explicitly. Stepping follows the current record's links and
/// keeps the index in `0..len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Record under the cursor
    pub fn current<'a>(&self, ring: &'a ClockRing) -> Option<&'a ClockRecord> {
        ring.at(self.index)
    }

    /// Move to the record linked after the current one
    pub fn step_next<'a>(&mut self, ring: &'a ClockRing) -> Option<&'a ClockRecord> {
        let node = ring.node(self.index)?;
        self.index = (self.index + 1) % ring.len();
        let next = node.next().record();
        debug!("Cursor moved next to {} ({})", self.index, next.city_name());
        Some(next)
    }

    /// Move to the record linked before the current one
    pub fn step_previous<'a>(&mut self, ring: &'a ClockRing) -> Option<&'a ClockRecord> {
        let node = ring.node(self.index)?;
        self.index = (self.index + ring.len() - 1) % ring.len();
        let previous = node.previous().record();
        debug!(
            "Cursor moved previous to {} ({})",
            self.index,
            previous.city_name()
        );
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_clock::ManualClock;

    fn ring() -> ClockRing {
        let mut ring = ClockRing::with_clock(ManualClock::frozen());
        ring.append("Colombia", "America/Bogota", "c.png").unwrap();
        ring.append("United Kingdom", "Europe/London", "u.png")
            .unwrap();
        ring.append("China", "Asia/Shanghai", "z.png").unwrap();
        ring
    }

    #[test]
    fn test_next_wraps() {
        let ring = ring();
        let mut cursor = Cursor::default();

        assert_eq!(cursor.step_next(&ring).unwrap().city_name(), "United Kingdom");
        assert_eq!(cursor.step_next(&ring).unwrap().city_name(), "China");
        assert_eq!(cursor.step_next(&ring).unwrap().city_name(), "Colombia");
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let ring = ring();
        let mut cursor = Cursor::default();

        assert_eq!(cursor.step_previous(&ring).unwrap().city_name(), "China");
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current(&ring).unwrap().city_name(), "China");
    }

    #[test]
    fn test_step_returns_record_under_new_index() {
        let ring = ring();
        let mut cursor = Cursor::new(1);
        for _ in 0..7 {
            let shown = cursor.step_next(&ring).unwrap().city_name();
            assert_eq!(cursor.current(&ring).unwrap().city_name(), shown);
        }
        for _ in 0..7 {
            let shown = cursor.step_previous(&ring).unwrap().city_name();
            assert_eq!(cursor.current(&ring).unwrap().city_name(), shown);
        }
    }

    #[test]
    fn test_empty_ring() {
        let ring = ClockRing::with_clock(ManualClock::frozen());
        let mut cursor = Cursor::default();
        assert!(cursor.current(&ring).is_none());
        assert!(cursor.step_next(&ring).is_none());
        assert!(cursor.step_previous(&ring).is_none());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_stale_index_does_not_move() {
        let ring = ring();
        let mut cursor = Cursor::new(10);
        assert!(cursor.step_next(&ring).is_none());
        assert_eq!(cursor.index(), 10);
    }
}
