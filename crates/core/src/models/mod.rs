//! Shared domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display names for the in-game week, indexed by weekday number (0 = Monday).
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One of the four in-game seasons.
///
/// The ordering matches the positional season mask in the catalog file
/// (`a` at position 0 means Spring, position 1 Summer, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// First mask position.
    Spring,
    /// Second mask position.
    Summer,
    /// Third mask position.
    Fall,
    /// Fourth mask position.
    Winter,
}

impl Season {
    /// All seasons in mask order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Parse a season from user input, case-insensitively.
    ///
    /// Returns `None` for unrecognised input; callers decide the fallback.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A giftable item; immutable once loaded from the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name as written in the catalog file.
    pub name: String,
}

impl Item {
    /// Build an item from its catalog name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Preference and progress record for a single NPC.
///
/// The `name` is uppercase-normalised and doubles as the store key. Likes and
/// loves accumulate across catalog lines in file order; the same item may be
/// appended more than once if the file repeats it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcRecord {
    /// Uppercase-normalised NPC identifier.
    pub name: String,
    /// Items this NPC loves, in catalog-file order.
    pub loves: Vec<String>,
    /// Items this NPC likes, in catalog-file order.
    pub likes: Vec<String>,
    /// Gifts given since the last week/season reset; always within `0..=2`.
    pub weekly_count: u8,
    /// Whether a gift was already given on the current in-game day.
    pub gift_received_today: bool,
}

impl NpcRecord {
    /// Create an empty record for the given (already normalised) identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seasons_case_insensitively() {
        assert_eq!(Season::parse("spring"), Some(Season::Spring));
        assert_eq!(Season::parse("  WINTER "), Some(Season::Winter));
        assert_eq!(Season::parse("Fall"), Some(Season::Fall));
        assert_eq!(Season::parse("autumn"), None);
        assert_eq!(Season::parse(""), None);
    }

    #[test]
    fn season_mask_order_is_stable() {
        assert_eq!(
            Season::ALL,
            [Season::Spring, Season::Summer, Season::Fall, Season::Winter]
        );
        assert_eq!(Season::Summer.to_string(), "Summer");
    }
}
