use log::{debug, info};
use meridian_clock::SystemClock;
use meridian_core::{ClockResult, Theme};
use meridian_ports::Clock;
use serde::Serialize;
use std::sync::Arc;

use crate::record::ClockRecord;
use crate::snapshot::ClockSnapshot;

/// Arena slot: a record plus the slot indices of its neighbours
#[derive(Debug)]
struct Node {
    record: ClockRecord,
    next: usize,
    previous: usize,
}

/// Circular, doubly linked, append-only collection of clocks
///
/// Nodes are stored in insertion order in an arena and linked by slot index.
/// For a non-empty ring, following `next` `len()` times from any node returns
/// to that node, and `next.previous` is always the node itself.
pub struct ClockRing {
    nodes: Vec<Node>,
    head: Option<usize>,
    clock: Arc<dyn Clock>,
}

/// One row of [`ClockRing::structure_dump`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureEntry {
    pub index: usize,
    pub city: String,
    pub next: String,
    pub previous: String,
    pub is_head: bool,
}

impl ClockRing {
    /// Create an empty ring whose clocks read time from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            clock,
        }
    }

    pub fn with_clock<C: Clock + 'static>(clock: C) -> Self {
        Self::new(Arc::new(clock))
    }

    /// Empty ring reading the host's wall clock
    pub fn with_system_clock() -> Self {
        Self::with_clock(SystemClock::new())
    }

    /// Time source shared by every record of this ring
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Insert a new clock as the tail, immediately before the head
    ///
    /// # Errors
    /// `ClockError::InvalidTimezone` if `timezone_id` is unknown; the ring is
    /// left untouched in that case.
    pub fn append(
        &mut self,
        city_name: impl Into<String>,
        timezone_id: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> ClockResult<()> {
        let record = ClockRecord::new(city_name, timezone_id, image_ref, Arc::clone(&self.clock))?;
        let slot = self.nodes.len();

        match self.head {
            None => {
                self.nodes.push(Node {
                    record,
                    next: slot,
                    previous: slot,
                });
                self.head = Some(slot);
            }
            Some(head) => {
                let tail = self.nodes[head].previous;
                self.nodes.push(Node {
                    record,
                    next: head,
                    previous: tail,
                });
                self.nodes[tail].next = slot;
                self.nodes[head].previous = slot;
            }
        }

        let added = &self.nodes[slot].record;
        info!(
            "Added clock {} ({}) at position {}",
            added.city_name(),
            added.timezone_id(),
            slot
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first inserted node
    pub fn head(&self) -> Option<NodeRef<'_>> {
        self.head.map(|slot| NodeRef { ring: self, slot })
    }

    /// Walk `index` steps from the head along `next`
    fn slot_at(&self, index: usize) -> Option<usize> {
        let head = self.head?;
        if index >= self.len() {
            return None;
        }

        let mut slot = head;
        for _ in 0..index {
            slot = self.nodes[slot].next;
        }
        Some(slot)
    }

    /// Node at ring position `index`, counting from the head
    pub fn node(&self, index: usize) -> Option<NodeRef<'_>> {
        self.slot_at(index).map(|slot| NodeRef { ring: self, slot })
    }

    /// Record at ring position `index`; `None` if out of range or empty
    pub fn at(&self, index: usize) -> Option<&ClockRecord> {
        self.slot_at(index).map(|slot| &self.nodes[slot].record)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut ClockRecord> {
        self.slot_at(index).map(|slot| &mut self.nodes[slot].record)
    }

    /// Record linked after the one at `index`
    pub fn next_of(&self, index: usize) -> Option<&ClockRecord> {
        self.node(index).map(|node| node.next().record())
    }

    /// Record linked before the one at `index`
    pub fn previous_of(&self, index: usize) -> Option<&ClockRecord> {
        self.node(index).map(|node| node.previous().record())
    }

    /// Records in ring order, starting at the head, one lap
    pub fn iter(&self) -> Records<'_> {
        Records {
            ring: self,
            slot: self.head,
            remaining: self.len(),
        }
    }

    /// Fresh snapshots of every clock in ring order, all taken at one instant
    pub fn all_snapshots(&self) -> Vec<ClockSnapshot> {
        let base = self.clock.now();
        self.iter().map(|record| record.snapshot_at(base)).collect()
    }

    /// `Day` when at least half of the clocks are in daytime
    ///
    /// Ties and the empty ring resolve to `Day`. Recomputed on every call.
    pub fn dominant_theme(&self) -> Theme {
        let day_count = self.iter().filter(|record| record.is_daytime()).count();
        let theme = if day_count * 2 >= self.len() {
            Theme::Day
        } else {
            Theme::Night
        };

        debug!(
            "Dominant theme {} ({} of {} clocks in daytime)",
            theme,
            day_count,
            self.len()
        );
        theme
    }

    /// Live link structure in ring order
    pub fn structure_dump(&self) -> Vec<StructureEntry> {
        let Some(head) = self.head() else {
            return Vec::new();
        };

        let mut entries = Vec::with_capacity(self.len());
        let mut node = head;
        for index in 0..self.len() {
            entries.push(StructureEntry {
                index,
                city: node.record().city_name().to_string(),
                next: node.next().record().city_name().to_string(),
                previous: node.previous().record().city_name().to_string(),
                is_head: node.is_head(),
            });
            node = node.next();
        }
        entries
    }
}

impl Default for ClockRing {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl std::fmt::Debug for ClockRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockRing")
            .field("len", &self.len())
            .field("head", &self.head)
            .field("clock", &self.clock.name())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ClockRing {
    type Item = &'a ClockRecord;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowed handle on one node, used to follow links
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    ring: &'a ClockRing,
    slot: usize,
}

impl<'a> NodeRef<'a> {
    pub fn record(&self) -> &'a ClockRecord {
        &self.ring.nodes[self.slot].record
    }

    pub fn next(&self) -> NodeRef<'a> {
        NodeRef {
            ring: self.ring,
            slot: self.ring.nodes[self.slot].next,
        }
    }

    pub fn previous(&self) -> NodeRef<'a> {
        NodeRef {
            ring: self.ring,
            slot: self.ring.nodes[self.slot].previous,
        }
    }

    pub fn is_head(&self) -> bool {
        self.ring.head == Some(self.slot)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ring, other.ring) && self.slot == other.slot
    }
}

impl Eq for NodeRef<'_> {}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("slot", &self.slot)
            .field("city", &self.record().city_name())
            .finish()
    }
}

/// Iterator over one lap of the ring, see [`ClockRing::iter`]
pub struct Records<'a> {
    ring: &'a ClockRing,
    slot: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a ClockRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.slot?;
        let node = &self.ring.nodes[slot];
        self.slot = Some(node.next);
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Records<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use meridian_clock::ManualClock;
    use meridian_core::ClockError;

    fn seeded_ring() -> ClockRing {
        let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap());
        let mut ring = ClockRing::with_clock(clock);
        ring.append("Colombia", "America/Bogota", "clock_colombia.png")
            .unwrap();
        ring.append("United Kingdom", "Europe/London", "clock_uk.png")
            .unwrap();
        ring.append("China", "Asia/Shanghai", "clock_china.png")
            .unwrap();
        ring
    }

    #[test]
    fn test_first_append_links_to_itself() {
        let mut ring = ClockRing::with_clock(ManualClock::frozen());
        ring.append("Colombia", "America/Bogota", "clock_colombia.png")
            .unwrap();

        let head = ring.head().unwrap();
        assert_eq!(head.next(), head);
        assert_eq!(head.previous(), head);
        assert!(head.is_head());
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_append_order() {
        let ring = seeded_ring();
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.at(0).unwrap().city_name(), "Colombia");
        assert_eq!(ring.next_of(0).unwrap().city_name(), "United Kingdom");
        assert_eq!(ring.previous_of(0).unwrap().city_name(), "China");
        assert_eq!(ring.next_of(2).unwrap().city_name(), "Colombia");
    }

    #[test]
    fn test_at_out_of_range() {
        let ring = seeded_ring();
        assert!(ring.at(3).is_none());
        assert!(ring.at(usize::MAX).is_none());
        assert!(ring.node(3).is_none());
    }

    #[test]
    fn test_failed_append_leaves_ring_untouched() {
        let mut ring = seeded_ring();
        let before = ring.structure_dump();

        let err = ring.append("Nowhere", "Not/AZone", "x.png").unwrap_err();

        assert_eq!(err, ClockError::InvalidTimezone("Not/AZone".to_string()));
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.structure_dump(), before);
    }

    #[test]
    fn test_at_mut_changes_one_record() {
        let mut ring = seeded_ring();
        ring.at_mut(1).unwrap().set_offset(2, 0);

        assert!(ring.at(1).unwrap().is_modified());
        assert!(!ring.at(0).unwrap().is_modified());
        assert!(!ring.at(2).unwrap().is_modified());
    }

    #[test]
    fn test_iter_is_one_lap() {
        let ring = seeded_ring();
        let cities: Vec<_> = ring.iter().map(|r| r.city_name()).collect();
        assert_eq!(cities, ["Colombia", "United Kingdom", "China"]);
        assert_eq!(ring.iter().len(), 3);
    }

    #[test]
    fn test_structure_dump() {
        let ring = seeded_ring();
        let dump = ring.structure_dump();

        assert_eq!(dump.len(), 3);
        assert_eq!(
            dump[0],
            StructureEntry {
                index: 0,
                city: "Colombia".to_string(),
                next: "United Kingdom".to_string(),
                previous: "China".to_string(),
                is_head: true,
            }
        );
        assert_eq!(dump[2].next, "Colombia");
        assert!(!dump[1].is_head);
        assert!(!dump[2].is_head);
    }

    #[test]
    fn test_dominant_theme() {
        // 14:00 UTC: Bogota 09:00 (day), London 14:00 (day), Shanghai 22:00 (night)
        let ring = seeded_ring();
        assert_eq!(ring.dominant_theme(), Theme::Day);
    }

    #[test]
    fn test_dominant_theme_night_majority() {
        // 02:00 UTC: Bogota 21:00, London 02:00, Shanghai 10:00
        let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 1, 15, 2, 0, 0).unwrap());
        let mut ring = ClockRing::with_clock(clock);
        ring.append("Colombia", "America/Bogota", "c.png").unwrap();
        ring.append("United Kingdom", "Europe/London", "u.png")
            .unwrap();
        ring.append("China", "Asia/Shanghai", "z.png").unwrap();

        assert_eq!(ring.dominant_theme(), Theme::Night);
    }

    #[test]
    fn test_empty_ring_defaults() {
        let ring = ClockRing::default();
        assert!(ring.is_empty());
        assert!(ring.head().is_none());
        assert!(ring.at(0).is_none());
        assert!(ring.next_of(0).is_none());
        assert_eq!(ring.dominant_theme(), Theme::Day);
        assert!(ring.all_snapshots().is_empty());
        assert!(ring.structure_dump().is_empty());
        assert_eq!(ring.iter().count(), 0);
    }

    #[test]
    fn test_with_system_clock() {
        let ring = ClockRing::with_system_clock();
        assert!(ring.is_empty());
        assert_eq!(ring.clock().name(), "SystemClock");
    }

    #[test]
    fn test_all_snapshots_share_one_instant() {
        let mut ring = seeded_ring();
        ring.at_mut(1).unwrap().set_offset(0, 45);

        let snapshots = ring.all_snapshots();
        let fields: Vec<(u32, u32, u32)> = snapshots
            .iter()
            .map(|snap| (snap.hour, snap.minute, snap.second))
            .collect();
        assert_eq!(fields, [(9, 0, 0), (14, 45, 0), (22, 0, 0)]);

        for (record, snap) in ring.iter().zip(&snapshots) {
            assert_eq!(record.snapshot(), *snap);
        }
    }
}
