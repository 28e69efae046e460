use meridian_core::Timestamp;

/// Source of the UTC instant every ring clock projects into its own zone
///
/// Records never read the wall clock themselves; they share one of these,
/// so a pinned implementation fixes what every clock in a ring displays.
pub trait Clock: Send + Sync {
    /// Current UTC instant
    fn now(&self) -> Timestamp;

    /// Label shown in `Debug` output of rings and records
    fn name(&self) -> &str {
        "Clock"
    }
}
