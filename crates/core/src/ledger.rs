//! Gift-ledger orchestration: the application state struct tying the
//! catalog, preference store and clock together.

use crate::{
    models::Season,
    store::{GiftOutcome, RemainingGifts, StoreError},
    Catalog, Clock, PreferenceStore,
};

/// Outcome of a season change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonChange {
    /// The season now in effect.
    pub season: Season,
    /// False when the input was unrecognised and the Spring fallback was
    /// applied instead.
    pub recognized: bool,
}

/// Owns the whole tracker state for the process lifetime.
///
/// Every menu operation goes through here; the shell holds a single
/// `Tracker` and no other mutable state. Operations that need confirmation
/// (advancing the day, resetting the week) are only called after the shell
/// has obtained it.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    /// Read-only seasonal item catalog.
    pub catalog: Catalog,
    /// NPC preference and progress records.
    pub store: PreferenceStore,
    /// Current weekday and season.
    pub clock: Clock,
}

impl Tracker {
    /// Assemble a tracker from freshly loaded state.
    pub fn new(catalog: Catalog, store: PreferenceStore) -> Self {
        Self {
            catalog,
            store,
            clock: Clock::new(),
        }
    }

    /// Record one gift to the named NPC.
    pub fn record_gift(&mut self, npc: &str) -> Result<GiftOutcome, StoreError> {
        self.store.record_gift(npc)
    }

    /// Overwrite an NPC's weekly count.
    pub fn set_count(&mut self, npc: &str, count: i64) -> Result<u8, StoreError> {
        self.store.set_count(npc, count)
    }

    /// Advance to the next weekday and clear every daily flag.
    ///
    /// Weekly counts are untouched. Returns the new weekday name for
    /// display.
    pub fn advance_day(&mut self) -> &'static str {
        self.clock.advance_day();
        self.store.clear_daily_flags();
        self.clock.weekday_name()
    }

    /// Change season from user input.
    ///
    /// Unrecognised names fall back to Spring; the returned flag lets the
    /// shell surface that instead of silently masking a typo. The week
    /// restarts at Monday and daily flags clear, but weekly counts persist
    /// across seasons.
    pub fn change_season(&mut self, input: &str) -> SeasonChange {
        let parsed = Season::parse(input);
        let season = parsed.unwrap_or(Season::Spring);
        self.clock.set_season(season);
        self.store.clear_daily_flags();
        SeasonChange {
            season,
            recognized: parsed.is_some(),
        }
    }

    /// Restart the week at Monday and clear daily flags.
    ///
    /// Weekly counts survive a week reset; use Edit Count to adjust them.
    pub fn reset_week(&mut self) {
        self.clock.start_week();
        self.store.clear_daily_flags();
    }

    /// NPCs still giftable today, with their current-season loves and likes.
    pub fn remaining(&self) -> Vec<RemainingGifts> {
        self.store.remaining(self.clock.season(), &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::load_lines;

    fn tracker() -> Tracker {
        let (catalog, store) = load_lines([
            "aaa.;Carrot;V(MIRA);K(JUNO,LEO)",
            "...a;Pine Cone;V(JUNO);K(MIRA)",
        ]);
        Tracker::new(catalog, store)
    }

    #[test]
    fn gift_twice_same_day_counts_once() {
        let mut tracker = tracker();

        assert_eq!(
            tracker.record_gift("MIRA"),
            Ok(GiftOutcome::Recorded { weekly_count: 1 })
        );
        assert_eq!(
            tracker.record_gift("MIRA"),
            Ok(GiftOutcome::AlreadyGiftedToday)
        );
        assert_eq!(tracker.store.get("MIRA").unwrap().weekly_count, 1);
    }

    #[test]
    fn next_day_allows_another_gift_until_the_weekly_limit() {
        let mut tracker = tracker();
        tracker.record_gift("MIRA").unwrap();

        assert_eq!(tracker.advance_day(), "Tuesday");
        assert_eq!(
            tracker.record_gift("MIRA"),
            Ok(GiftOutcome::Recorded { weekly_count: 2 })
        );

        tracker.advance_day();
        assert_eq!(
            tracker.record_gift("MIRA"),
            Ok(GiftOutcome::WeeklyLimitReached)
        );
    }

    #[test]
    fn advance_day_clears_flags_but_not_counts() {
        let mut tracker = tracker();
        tracker.record_gift("JUNO").unwrap();

        tracker.advance_day();
        let juno = tracker.store.get("JUNO").unwrap();
        assert!(!juno.gift_received_today);
        assert_eq!(juno.weekly_count, 1);
    }

    #[test]
    fn change_season_resets_week_and_flags() {
        let mut tracker = tracker();
        tracker.advance_day();
        tracker.record_gift("MIRA").unwrap();

        let change = tracker.change_season("winter");
        assert_eq!(change.season, Season::Winter);
        assert!(change.recognized);
        assert_eq!(tracker.clock.weekday(), 0);
        assert!(!tracker.store.get("MIRA").unwrap().gift_received_today);
        assert_eq!(tracker.store.get("MIRA").unwrap().weekly_count, 1);
    }

    #[test]
    fn unknown_season_falls_back_to_spring() {
        let mut tracker = tracker();
        tracker.change_season("winter");

        let change = tracker.change_season("sprimg");
        assert_eq!(change.season, Season::Spring);
        assert!(!change.recognized);
    }

    #[test]
    fn reset_week_keeps_weekly_counts() {
        let mut tracker = tracker();
        tracker.record_gift("MIRA").unwrap();
        tracker.advance_day();
        tracker.advance_day();

        tracker.reset_week();
        assert_eq!(tracker.clock.weekday(), 0);
        let mira = tracker.store.get("MIRA").unwrap();
        assert_eq!(mira.weekly_count, 1, "weekly counts survive a week reset");
        assert!(!mira.gift_received_today);
    }

    #[test]
    fn remaining_reflects_the_current_season() {
        let mut tracker = tracker();

        let spring = tracker.remaining();
        let mira = spring.iter().find(|e| e.name == "MIRA").unwrap();
        assert_eq!(mira.loves, ["Carrot"]);
        assert!(mira.likes.is_empty());

        tracker.change_season("Winter");
        let winter = tracker.remaining();
        let mira = winter.iter().find(|e| e.name == "MIRA").unwrap();
        assert!(mira.loves.is_empty());
        assert_eq!(mira.likes, ["Pine Cone"]);
    }

    #[test]
    fn remaining_skips_npcs_at_the_weekly_limit() {
        let mut tracker = tracker();
        tracker.set_count("LEO", 2).unwrap();

        let names: Vec<_> = tracker.remaining().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["JUNO", "MIRA"]);
    }
}
