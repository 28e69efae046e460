use chrono::{NaiveTime, Timelike};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ring::ClockRing;

/// Business-hours window, `start_hour` inclusive, `end_hour` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingWindow {
    pub start_hour: i64,
    pub end_hour: i64,
}

impl MeetingWindow {
    pub fn new(start_hour: i64, end_hour: i64) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        let hour = i64::from(hour);
        hour >= self.start_hour && hour < self.end_hour
    }
}

impl Default for MeetingWindow {
    /// 09:00 to 17:00
    fn default() -> Self {
        Self::new(9, 17)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingQuality {
    Excellent,
}

/// One clock's label for a candidate hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotTime {
    pub city: String,
    /// 12-hour label, e.g. `09:00 AM`
    pub time: String,
    pub hour: u32,
}

/// A reference hour that lands inside the window on every clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingSlot {
    pub reference_hour: u32,
    pub times: Vec<SlotTime>,
    pub quality: MeetingQuality,
}

impl ClockRing {
    /// Reference hours `h` in `0..24` such that `h:00` on each clock's own
    /// current date falls inside `window` for every clock
    ///
    /// Every clock receives the same numeric hour; this checks the hour against
    /// each clock's naive local calendar, not a cross-zone availability.
    pub fn optimal_meeting_times(&self, window: MeetingWindow) -> Vec<MeetingSlot> {
        if self.is_empty() {
            return Vec::new();
        }

        let dates: Vec<_> = self
            .iter()
            .map(|record| (record.city_name(), record.current_time().date_naive()))
            .collect();

        let mut slots = Vec::new();
        for reference_hour in 0..24 {
            let Some(start) = NaiveTime::from_hms_opt(reference_hour, 0, 0) else {
                continue;
            };

            let mut all_in_window = true;
            let mut times = Vec::with_capacity(dates.len());
            for (city, date) in &dates {
                let candidate = date.and_time(start);
                let hour = candidate.hour();
                if !window.contains(hour) {
                    all_in_window = false;
                }
                times.push(SlotTime {
                    city: city.to_string(),
                    time: candidate.format("%I:%M %p").to_string(),
                    hour,
                });
            }

            if all_in_window {
                slots.push(MeetingSlot {
                    reference_hour,
                    times,
                    quality: MeetingQuality::Excellent,
                });
            }
        }

        debug!(
            "Meeting search {}..{} over {} clocks: {} slots",
            window.start_hour,
            window.end_hour,
            self.len(),
            slots.len()
        );
        slots
    }
}
