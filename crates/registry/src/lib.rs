//! Meridian Registry
//!
//! The clock registry and navigation engine: an append-only ring of
//! timezone-bound clocks with circular traversal, per-clock manual offsets,
//! and derived analytics.
//!
//! ## Structure
//!
//! ```text
//!            head
//!             │
//!   ┌──► [Colombia] ◄──► [United Kingdom] ◄──► [China] ◄──┐
//!   └─────────────────────────────────────────────────────┘
//! ```
//!
//! Records live in an arena and link to each other by slot index, so the
//! ring has no ownership cycles and relative navigation is O(1) once a node
//! is in hand. Index lookups walk from the head and return `None` when the
//! index does not resolve.
//!
//! ## Usage
//!
//! ```ignore
//! use meridian_registry::{ClockRing, Cursor, MeetingWindow};
//!
//! let mut ring = ClockRing::default();
//! ring.append("Colombia", "America/Bogota", "clock_colombia.png")?;
//! ring.append("United Kingdom", "Europe/London", "clock_uk.png")?;
//!
//! let theme = ring.dominant_theme();
//! let gap = ring.difference(0, 1);
//! let slots = ring.optimal_meeting_times(MeetingWindow::default());
//!
//! let mut cursor = Cursor::default();
//! let shown = cursor.step_next(&ring);
//! ```

pub mod analytics;
mod cursor;
mod record;
mod ring;
mod snapshot;

pub use analytics::{
    Conversion, MeetingQuality, MeetingSlot, MeetingWindow, SlotTime, TimeDifference,
};
pub use cursor::Cursor;
pub use record::ClockRecord;
pub use ring::{ClockRing, NodeRef, Records, StructureEntry};
pub use snapshot::{ClockSnapshot, hour_angle, minute_angle, second_angle};

// Re-export the shared kernel types callers need alongside the ring
pub use meridian_core::{ClockError, ClockResult, ManualOffset, Theme};
