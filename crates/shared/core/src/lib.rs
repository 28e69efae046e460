//! Meridian Core
//!
//! Pure value types shared by the clock registry and its request layer.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod error;
pub mod values;

pub use error::{ClockError, ClockResult};
pub use values::{ManualOffset, Theme, Timestamp};
