use chrono::Timelike;
use serde::Serialize;

use crate::ring::ClockRing;

/// Wall-clock gap between two clocks of a ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeDifference {
    pub clock1: String,
    pub clock2: String,
    /// Hours from the first clock to the second, rounded to 2 decimals
    pub difference_hours: f64,
    /// e.g. `5 hours ahead`, `4h 30m behind`
    pub difference_text: String,
}

impl TimeDifference {
    /// Compare the hour and minute fields of two local times
    pub fn between<T: Timelike>(
        clock1: impl Into<String>,
        time1: &T,
        clock2: impl Into<String>,
        time2: &T,
    ) -> Self {
        let hour_delta = f64::from(time2.hour()) - f64::from(time1.hour());
        let minute_delta = f64::from(time2.minute()) - f64::from(time1.minute());
        let hours = hour_delta + minute_delta / 60.0;

        Self {
            clock1: clock1.into(),
            clock2: clock2.into(),
            difference_hours: (hours * 100.0).round() / 100.0,
            difference_text: describe(hours),
        }
    }

    pub fn is_ahead(&self) -> bool {
        self.difference_hours > 0.0
    }
}

/// Splits the float gap, so minutes are truncated after the division by 60
/// (a 70 minute gap built as `-2 + 50/60` reads `1h 9m`).
/// Only a strictly positive gap is "ahead"; zero reads as "behind".
fn describe(hours: f64) -> String {
    let direction = if hours > 0.0 { "ahead" } else { "behind" };
    let magnitude = hours.abs();
    let whole_hours = magnitude.trunc();
    let minutes = ((magnitude - whole_hours) * 60.0).trunc();

    if minutes == 0.0 {
        format!("{} hours {}", whole_hours as i64, direction)
    } else {
        format!("{}h {}m {}", whole_hours as i64, minutes as i64, direction)
    }
}

impl ClockRing {
    /// Gap between the clocks at `index1` and `index2`
    ///
    /// Each clock reads the time source on its own, so the two readings may
    /// be a few microseconds apart. `None` if either index does not resolve.
    pub fn difference(&self, index1: usize, index2: usize) -> Option<TimeDifference> {
        let first = self.at(index1)?;
        let second = self.at(index2)?;

        let time1 = first.current_time();
        let time2 = second.current_time();

        Some(TimeDifference::between(
            first.city_name(),
            &time1,
            second.city_name(),
            &time2,
        ))
    }
}
