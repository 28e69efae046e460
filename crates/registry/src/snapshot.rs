use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use meridian_core::Theme;
use serde::Serialize;

use crate::record::ClockRecord;

/// Hour hand angle in degrees, clockwise from 12 o'clock
pub fn hour_angle(hour: u32, minute: u32) -> f64 {
    f64::from(hour % 12) * 30.0 + f64::from(minute) * 0.5
}

/// Minute hand angle in degrees, clockwise from 12 o'clock
pub fn minute_angle(minute: u32) -> f64 {
    f64::from(minute) * 6.0
}

/// Second hand angle in degrees, clockwise from 12 o'clock
pub fn second_angle(second: u32) -> f64 {
    f64::from(second) * 6.0
}

/// Point-in-time display view of one clock
///
/// Every field is already localized to the clock's own timezone; callers
/// must not reinterpret them against another zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockSnapshot {
    pub city: String,
    pub timezone: String,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub is_day: bool,
    pub image: String,
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
    /// 12-hour time, e.g. `09:05 PM`
    pub formatted_time: String,
    /// Long date, e.g. `March 01, 2024`
    pub date: String,
    pub day_of_week: String,
    pub is_modified: bool,
    pub offset_hours: i64,
    pub offset_minutes: i64,
}

impl ClockSnapshot {
    pub(crate) fn capture(record: &ClockRecord, time: &DateTime<Tz>) -> Self {
        let (hour, minute, second) = (time.hour(), time.minute(), time.second());
        let offset = record.manual_offset();

        Self {
            city: record.city_name().to_string(),
            timezone: record.timezone_id().to_string(),
            hour,
            minute,
            second,
            is_day: Theme::for_hour(hour) == Theme::Day,
            image: record.image_ref().to_string(),
            hour_angle: hour_angle(hour, minute),
            minute_angle: minute_angle(minute),
            second_angle: second_angle(second),
            formatted_time: time.format("%I:%M %p").to_string(),
            date: time.format("%B %d, %Y").to_string(),
            day_of_week: time.format("%A").to_string(),
            is_modified: record.is_modified(),
            offset_hours: offset.hours(),
            offset_minutes: offset.minutes(),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.is_day { Theme::Day } else { Theme::Night }
    }
}
