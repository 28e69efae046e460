use meridian_registry::{
    ClockRecord, ClockSnapshot, Conversion, MeetingSlot, StructureEntry, Theme, TimeDifference,
};
use serde::{Deserialize, Serialize};

/// All clocks plus the aggregate theme
#[derive(Debug, Clone, Serialize)]
pub struct ClocksResponse {
    pub clocks: Vec<ClockSnapshot>,
    pub theme: Theme,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// The clock under the cursor
#[derive(Debug, Clone, Serialize)]
pub struct ClockViewResponse {
    pub clock: ClockSnapshot,
    pub theme: Theme,
    pub index: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    pub timestamp: String,
}

impl ClockViewResponse {
    pub fn new(
        record: &ClockRecord,
        index: usize,
        total: usize,
        direction: Option<Direction>,
        timestamp: String,
    ) -> Self {
        let clock = record.snapshot();
        ClockViewResponse {
            theme: clock.theme(),
            clock,
            index,
            total,
            direction,
            timestamp,
        }
    }
}

/// Set a manual offset; `index` defaults to the cursor position
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTimeRequest {
    #[serde(default)]
    pub index: Option<i64>,
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
}

/// Clear a manual offset; `index` defaults to the cursor position
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetTimeRequest {
    #[serde(default)]
    pub index: Option<i64>,
}

/// Result of an offset change
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTimeResponse {
    pub success: bool,
    pub clock: ClockSnapshot,
    pub theme: Theme,
    pub message: String,
}

impl UpdateTimeResponse {
    pub fn new(record: &ClockRecord, message: String) -> Self {
        let clock = record.snapshot();
        UpdateTimeResponse {
            success: true,
            theme: clock.theme(),
            clock,
            message,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompareQuery {
    #[serde(default)]
    pub clock1: i64,
    #[serde(default = "default_second_index")]
    pub clock2: i64,
}

pub type CompareResponse = TimeDifference;

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingQuery {
    #[serde(default = "default_start_hour")]
    pub start: i64,
    #[serde(default = "default_end_hour")]
    pub end: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeetingTimesResponse {
    pub optimal_times: Vec<MeetingSlot>,
    pub total_options: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructureResponse {
    pub structure: Vec<StructureEntry>,
    pub total_nodes: usize,
    pub data_structure: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertQuery {
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_second_index")]
    pub to: i64,
    #[serde(default = "default_convert_hour")]
    pub hour: i64,
    #[serde(default)]
    pub minute: i64,
}

pub type ConvertResponse = Conversion;

/// Error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

fn default_second_index() -> i64 {
    1
}

fn default_start_hour() -> i64 {
    9
}

fn default_end_hour() -> i64 {
    17
}

fn default_convert_hour() -> i64 {
    12
}
