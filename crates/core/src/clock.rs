//! In-game weekday and season tracking.

use serde::{Deserialize, Serialize};

use crate::models::{Season, WEEKDAYS};

/// Current weekday (0 = Monday .. 6 = Sunday) and season.
///
/// Both change only on explicit user commands; advancing the day is the one
/// automatic wraparound and never touches the season. Clearing per-day NPC
/// state on these transitions is the ledger's job, not the clock's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    weekday: usize,
    season: Season,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            weekday: 0,
            season: Season::Spring,
        }
    }
}

impl Clock {
    /// Start of week in Spring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current weekday index, always within `0..=6`.
    pub fn weekday(&self) -> usize {
        self.weekday
    }

    /// Display name of the current weekday.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday]
    }

    /// Current season.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Move to the next weekday, wrapping Sunday back to Monday.
    pub fn advance_day(&mut self) {
        self.weekday = (self.weekday + 1) % WEEKDAYS.len();
    }

    /// Jump back to Monday without changing the season.
    pub fn start_week(&mut self) {
        self.weekday = 0;
    }

    /// Switch season; the week restarts at Monday.
    pub fn set_season(&mut self, season: Season) {
        self.season = season;
        self.weekday = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_wraps_sunday_to_monday() {
        let mut clock = Clock::new();
        assert_eq!(clock.weekday_name(), "Monday");

        for _ in 0..6 {
            clock.advance_day();
        }
        assert_eq!(clock.weekday_name(), "Sunday");

        clock.advance_day();
        assert_eq!(clock.weekday(), 0);
        assert_eq!(clock.season(), Season::Spring, "season is untouched");
    }

    #[test]
    fn season_change_restarts_the_week() {
        let mut clock = Clock::new();
        clock.advance_day();
        clock.advance_day();

        clock.set_season(Season::Fall);
        assert_eq!(clock.weekday(), 0);
        assert_eq!(clock.season(), Season::Fall);
    }

    #[test]
    fn start_week_keeps_the_season() {
        let mut clock = Clock::new();
        clock.set_season(Season::Winter);
        clock.advance_day();

        clock.start_week();
        assert_eq!(clock.weekday(), 0);
        assert_eq!(clock.season(), Season::Winter);
    }
}
