mod offset;
mod theme;

use chrono::{DateTime, Utc};

pub use offset::ManualOffset;
pub use theme::Theme;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
