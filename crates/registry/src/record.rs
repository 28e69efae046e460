use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use log::{info, warn};
use meridian_core::{ClockError, ClockResult, ManualOffset, Theme, Timestamp};
use meridian_ports::Clock;
use std::fmt;
use std::sync::Arc;

use crate::snapshot::ClockSnapshot;

/// A single clock in the ring: a city bound to an IANA timezone
///
/// Identity (city, timezone, image) is fixed at construction. The manual
/// offset is the only mutable state.
pub struct ClockRecord {
    city_name: String,
    timezone_id: String,
    timezone: Tz,
    image_ref: String,
    manual_offset: ManualOffset,
    is_modified: bool,
    clock: Arc<dyn Clock>,
}

impl ClockRecord {
    /// Create a record, resolving `timezone_id` against the IANA database
    ///
    /// # Errors
    /// `ClockError::InvalidTimezone` if the identifier is not recognised.
    pub fn new(
        city_name: impl Into<String>,
        timezone_id: impl Into<String>,
        image_ref: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> ClockResult<Self> {
        let timezone_id = timezone_id.into();
        let timezone = timezone_id
            .parse::<Tz>()
            .map_err(|_| ClockError::InvalidTimezone(timezone_id.clone()))?;

        Ok(Self {
            city_name: city_name.into(),
            timezone_id,
            timezone,
            image_ref: image_ref.into(),
            manual_offset: ManualOffset::ZERO,
            is_modified: false,
            clock,
        })
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn timezone_id(&self) -> &str {
        &self.timezone_id
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn manual_offset(&self) -> ManualOffset {
        self.manual_offset
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Current local time in this clock's timezone, manual offset applied
    pub fn current_time(&self) -> DateTime<Tz> {
        self.time_at(self.clock.now())
    }

    /// Local time for an explicit base instant, manual offset applied
    pub fn time_at(&self, base: Timestamp) -> DateTime<Tz> {
        let local = base.with_timezone(&self.timezone);
        match self
            .manual_offset
            .to_duration()
            .and_then(|shift| local.checked_add_signed(shift))
        {
            Some(shifted) => shifted,
            None => {
                warn!(
                    "Offset of {} minutes on {} is out of range, showing unshifted time",
                    self.manual_offset.total_minutes(),
                    self.city_name
                );
                local
            }
        }
    }

    /// Real local time in this clock's timezone, ignoring the manual offset
    pub fn zone_time(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.timezone)
    }

    /// Replace the manual offset
    ///
    /// Parts are not range checked; `set_offset(0, 0)` clears the modified flag.
    pub fn set_offset(&mut self, hours: i64, minutes: i64) {
        self.manual_offset = ManualOffset::new(hours, minutes);
        self.is_modified = hours != 0 || minutes != 0;
        info!(
            "Offset for {} set to {}h {}m",
            self.city_name,
            self.manual_offset.hours(),
            self.manual_offset.minutes()
        );
    }

    pub fn reset_offset(&mut self) {
        self.manual_offset = ManualOffset::ZERO;
        self.is_modified = false;
        info!("Offset for {} reset", self.city_name);
    }

    pub fn is_daytime(&self) -> bool {
        self.theme() == Theme::Day
    }

    /// Day/night classification of this clock's current hour
    pub fn theme(&self) -> Theme {
        Theme::for_hour(self.current_time().hour())
    }

    /// Display view of this clock, built from a single time read
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot::capture(self, &self.current_time())
    }

    /// Display view of this clock at an explicit base instant
    pub fn snapshot_at(&self, base: Timestamp) -> ClockSnapshot {
        ClockSnapshot::capture(self, &self.time_at(base))
    }
}

impl fmt::Debug for ClockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockRecord")
            .field("city_name", &self.city_name)
            .field("timezone_id", &self.timezone_id)
            .field("image_ref", &self.image_ref)
            .field("manual_offset", &self.manual_offset)
            .field("is_modified", &self.is_modified)
            .field("clock", &self.clock.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};
    use meridian_clock::ManualClock;

    fn pinned(hour: u32, minute: u32) -> Arc<dyn Clock> {
        Arc::new(ManualClock::at(
            Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 30).unwrap(),
        ))
    }

    fn bogota(clock: Arc<dyn Clock>) -> ClockRecord {
        ClockRecord::new("Colombia", "America/Bogota", "clock_colombia.png", clock).unwrap()
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let err = ClockRecord::new("Atlantis", "Ocean/Atlantis", "a.png", pinned(12, 0))
            .unwrap_err();
        assert_eq!(err, ClockError::InvalidTimezone("Ocean/Atlantis".to_string()));
    }

    #[test]
    fn test_current_time_in_zone() {
        // Bogota is UTC-5 with no DST
        let record = bogota(pinned(17, 20));
        let now = record.current_time();
        assert_eq!(now.hour(), 12);
        assert_eq!(now.minute(), 20);
        assert_eq!(now.second(), 30);
    }

    #[test]
    fn test_offset_shifts_time_and_marks_modified() {
        let mut record = bogota(pinned(17, 20));
        record.set_offset(2, 15);

        assert!(record.is_modified());
        assert_eq!(record.manual_offset().total_minutes(), 135);
        let now = record.current_time();
        assert_eq!((now.hour(), now.minute()), (14, 35));
    }

    #[test]
    fn test_negative_offset_crosses_midnight() {
        // 00:30 local in Bogota
        let mut record = bogota(pinned(5, 30));
        record.set_offset(-1, 0);

        let now = record.current_time();
        assert_eq!((now.hour(), now.minute()), (23, 30));
        assert_eq!(now.day(), 14);
    }

    #[test]
    fn test_zero_offset_is_not_modified() {
        let mut record = bogota(pinned(12, 0));
        record.set_offset(3, 0);
        record.set_offset(0, 0);
        assert!(!record.is_modified());
        assert!(record.manual_offset().is_zero());
    }

    #[test]
    fn test_reset_offset() {
        let mut record = bogota(pinned(12, 0));
        record.set_offset(-4, -45);
        record.reset_offset();
        assert!(!record.is_modified());
        assert_eq!(record.manual_offset(), ManualOffset::ZERO);
        assert_eq!(record.current_time().hour(), 7);
    }

    #[test]
    fn test_zone_time_ignores_offset() {
        let mut record = bogota(pinned(17, 0));
        record.set_offset(5, 0);
        assert_eq!(record.zone_time().hour(), 12);
        assert_eq!(record.current_time().hour(), 17);
    }

    #[test]
    fn test_daytime_boundaries() {
        // 11:00 UTC is 06:00 in Bogota
        assert!(bogota(pinned(11, 0)).is_daytime());
        // 23:00 UTC is 18:00 in Bogota
        assert!(!bogota(pinned(23, 0)).is_daytime());
        // 22:59 UTC is 17:59 in Bogota
        assert!(bogota(pinned(22, 59)).is_daytime());
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_zone_time() {
        let mut record = bogota(pinned(17, 0));
        record.set_offset(i64::MAX, 0);
        assert!(record.is_modified());
        assert_eq!(record.current_time().hour(), 12);
    }
}
