use chrono::{NaiveTime, TimeZone};
use log::debug;
use meridian_core::{ClockError, ClockResult};
use serde::Serialize;

use crate::ring::ClockRing;

/// A wall time on one clock expressed on another
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub from_city: String,
    pub to_city: String,
    pub source_time: String,
    pub target_time: String,
    /// Target calendar date differs from the source date
    pub date_change: bool,
}

impl ClockRing {
    /// Express `hour:minute` today on the clock at `from` as wall time on the
    /// clock at `to`
    ///
    /// "Today" is the real date in the source zone; manual offsets are not
    /// applied to either side. In a DST fold the earlier instant is used.
    ///
    /// # Errors
    /// - `NotFound` if either index does not resolve
    /// - `InvalidTime` if `hour:minute` is not a wall time on the source date
    pub fn convert(
        &self,
        from: usize,
        to: usize,
        hour: u32,
        minute: u32,
    ) -> ClockResult<Conversion> {
        let source = self.at(from).ok_or(ClockError::NotFound(from))?;
        let target = self.at(to).ok_or(ClockError::NotFound(to))?;

        let invalid = ClockError::InvalidTime { hour, minute };
        let wall = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(invalid.clone())?;
        let date = source.zone_time().date_naive();
        let source_time = source
            .timezone()
            .from_local_datetime(&date.and_time(wall))
            .earliest()
            .ok_or(invalid)?;
        let target_time = source_time.with_timezone(&target.timezone());

        debug!(
            "Converted {} {} to {} {}",
            source.city_name(),
            source_time,
            target.city_name(),
            target_time
        );

        Ok(Conversion {
            from_city: source.city_name().to_string(),
            to_city: target.city_name().to_string(),
            source_time: source_time.format("%I:%M %p").to_string(),
            target_time: target_time.format("%I:%M %p").to_string(),
            date_change: target_time.date_naive() != source_time.date_naive(),
        })
    }
}
