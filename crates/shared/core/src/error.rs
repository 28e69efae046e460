use thiserror::Error;

/// Errors raised by the clock registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The identifier is not a known IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// No clock lives at the requested index
    #[error("Clock not found at index {0}")]
    NotFound(usize),

    /// Hour/minute pair that does not name a wall-clock time
    #[error("Invalid time {hour}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;
