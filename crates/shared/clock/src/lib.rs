//! Meridian Clock Infrastructure
//!
//! Time sources behind the [`Clock`] port:
//!
//! - [`SystemClock`] reads the wall clock; used in production.
//! - [`ManualClock`] holds a pinned instant that only moves when told to;
//!   used wherever a test needs to know which hour every clock shows.
//!
//! ## Usage
//!
//! ```ignore
//! use meridian_clock::{ManualClock, SystemClock};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let wall = SystemClock::new();
//!
//! let pinned = ManualClock::at(Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap());
//! pinned.advance(Duration::minutes(30));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use meridian_ports::Clock;
