use serde::{Deserialize, Serialize};
use std::fmt;

/// Day/night classification of one clock or of a whole ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Daytime is the fixed window 06:00 (inclusive) to 18:00 (exclusive)
    pub fn for_hour(hour: u32) -> Self {
        if (6..18).contains(&hour) {
            Theme::Day
        } else {
            Theme::Night
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daytime_window() {
        assert_eq!(Theme::for_hour(5), Theme::Night);
        assert_eq!(Theme::for_hour(6), Theme::Day);
        assert_eq!(Theme::for_hour(17), Theme::Day);
        assert_eq!(Theme::for_hour(18), Theme::Night);
        assert_eq!(Theme::for_hour(0), Theme::Night);
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(Theme::default(), Theme::Day);
        assert_eq!(Theme::Night.to_string(), "night");
    }
}
