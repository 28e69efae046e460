//! Derived queries over the whole ring
//!
//! - [`TimeDifference`]: naive wall-clock gap between two clocks
//! - [`MeetingSlot`]: reference hours inside a business window for every clock
//! - [`Conversion`]: one clock's wall time expressed in another clock's zone
//!
//! The difference and meeting computations work on local hour/minute fields,
//! not on UTC offsets. A pair of zones with a fractional offset therefore does
//! not report its fixed offset as the difference.

mod convert;
mod difference;
mod meeting;

pub use convert::Conversion;
pub use difference::TimeDifference;
pub use meeting::{MeetingQuality, MeetingSlot, MeetingWindow, SlotTime};
