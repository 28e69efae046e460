//! Meridian Ports
//!
//! Port definitions (traits) for the Meridian clock registry.
//! These define the boundaries between the engine and its time source.

mod clock;

pub use clock::Clock;
