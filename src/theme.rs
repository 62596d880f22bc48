//! Day/night theme vocabulary and the time-of-day rules around it.
//!
//! The persisted form is a bare string (`"day"` / `"night"`). Anything else
//! read back from storage is treated as "no preference" so a corrupted value
//! falls back to the day default instead of failing.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{MORNING_END_HOUR, MORNING_START_HOUR};

/// The scene's visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    #[must_use]
    pub fn from_night(is_night: bool) -> Self {
        if is_night { Self::Night } else { Self::Day }
    }

    #[must_use]
    pub fn is_night(self) -> bool {
        self == Self::Night
    }

    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Parse a stored preference. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }
}

/// Whether `hour` (0–23, local time) falls in the morning window `[5, 12)`.
#[must_use]
pub fn is_morning(hour: u32) -> bool {
    (MORNING_START_HOUR..MORNING_END_HOUR).contains(&hour)
}

/// Stars are shown only at night outside the morning window.
#[must_use]
pub fn stars_visible(theme: Theme, hour: u32) -> bool {
    theme.is_night() && !is_morning(hour)
}
