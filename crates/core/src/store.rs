//! In-memory NPC preference and gift-progress store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    models::{Item, NpcRecord, Season},
    Catalog,
};

/// Maximum gifts an NPC may receive per in-game week.
pub const WEEKLY_GIFT_LIMIT: u8 = 2;

/// Errors for store operations that reference an NPC or a count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The named NPC does not exist in the store.
    #[error("NPC named '{0}' not found")]
    NotFound(String),
    /// A weekly count outside `0..=2` was supplied.
    #[error("invalid count {0}; expected a number between 0 and 2")]
    InvalidCount(i64),
}

/// Result of attempting to record a gift.
///
/// Refusals are routine outcomes rather than errors: the store is left
/// untouched and the shell simply reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftOutcome {
    /// The gift was recorded; carries the updated weekly count.
    Recorded {
        /// Weekly count after the increment.
        weekly_count: u8,
    },
    /// The NPC already holds two gifts this week.
    WeeklyLimitReached,
    /// The NPC already received a gift today.
    AlreadyGiftedToday,
}

/// Which preference list a catalog line appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceTier {
    /// The `loved_by` field.
    Loved,
    /// The `liked_by` field.
    Liked,
}

/// An NPC still giftable today, with its seasonal matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingGifts {
    /// NPC identifier.
    pub name: String,
    /// Current-season items the NPC loves, in catalog order.
    pub loves: Vec<String>,
    /// Current-season items the NPC likes, in catalog order.
    pub likes: Vec<String>,
}

/// Mapping from uppercase-normalised NPC identifier to its record.
///
/// Iteration order is alphabetical, which is also the order the remaining
/// list is presented in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceStore {
    npcs: BTreeMap<String, NpcRecord>,
}

impl PreferenceStore {
    /// Append an item to an NPC's loves or likes, creating the record on
    /// first mention.
    pub fn add_preference(&mut self, npc: &str, item: &str, tier: PreferenceTier) {
        let key = npc.to_uppercase();
        let record = self
            .npcs
            .entry(key.clone())
            .or_insert_with(|| NpcRecord::new(key));
        match tier {
            PreferenceTier::Loved => record.loves.push(item.to_string()),
            PreferenceTier::Liked => record.likes.push(item.to_string()),
        }
    }

    /// Record one gift to the named NPC.
    ///
    /// The weekly limit is checked before the daily flag, so an NPC at the
    /// limit reports [`GiftOutcome::WeeklyLimitReached`] regardless of
    /// whether it was gifted today.
    pub fn record_gift(&mut self, npc: &str) -> Result<GiftOutcome, StoreError> {
        let record = self.get_mut(npc)?;
        if record.weekly_count >= WEEKLY_GIFT_LIMIT {
            return Ok(GiftOutcome::WeeklyLimitReached);
        }
        if record.gift_received_today {
            return Ok(GiftOutcome::AlreadyGiftedToday);
        }
        record.weekly_count += 1;
        record.gift_received_today = true;
        Ok(GiftOutcome::Recorded {
            weekly_count: record.weekly_count,
        })
    }

    /// Overwrite an NPC's weekly count, leaving the daily flag untouched.
    ///
    /// Returns the stored value. Counts outside `0..=2` are rejected without
    /// mutation.
    pub fn set_count(&mut self, npc: &str, count: i64) -> Result<u8, StoreError> {
        if !(0..=i64::from(WEEKLY_GIFT_LIMIT)).contains(&count) {
            return Err(StoreError::InvalidCount(count));
        }
        let record = self.get_mut(npc)?;
        record.weekly_count = count as u8;
        Ok(record.weekly_count)
    }

    /// NPCs not yet maxed out this week nor gifted today, each with the
    /// subset of the current season's items it loves and likes.
    ///
    /// The season's item list is iterated and tested against the NPC's
    /// preferences, so matches come out in catalog order.
    pub fn remaining(&self, season: Season, catalog: &Catalog) -> Vec<RemainingGifts> {
        let season_items = catalog.items_in(season);
        self.npcs
            .values()
            .filter(|npc| npc.weekly_count != WEEKLY_GIFT_LIMIT && !npc.gift_received_today)
            .map(|npc| RemainingGifts {
                name: npc.name.clone(),
                loves: seasonal_matches(season_items, &npc.loves),
                likes: seasonal_matches(season_items, &npc.likes),
            })
            .collect()
    }

    /// Clear every NPC's gift-received-today flag. Weekly counts are never
    /// touched here.
    pub fn clear_daily_flags(&mut self) {
        for record in self.npcs.values_mut() {
            record.gift_received_today = false;
        }
    }

    /// Look up an NPC case-insensitively.
    pub fn get(&self, npc: &str) -> Option<&NpcRecord> {
        self.npcs.get(&npc.to_uppercase())
    }

    /// Number of known NPCs.
    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    /// True when the catalog file mentioned no NPCs.
    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }

    fn get_mut(&mut self, npc: &str) -> Result<&mut NpcRecord, StoreError> {
        let key = npc.to_uppercase();
        self.npcs
            .get_mut(&key)
            .ok_or_else(|| StoreError::NotFound(key.clone()))
    }
}

fn seasonal_matches(season_items: &[Item], preferences: &[String]) -> Vec<String> {
    season_items
        .iter()
        .filter(|item| preferences.contains(&item.name))
        .map(|item| item.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> PreferenceStore {
        let mut store = PreferenceStore::default();
        for name in names {
            store.add_preference(name, "Apple", PreferenceTier::Loved);
        }
        store
    }

    #[test]
    fn record_gift_increments_once_per_day() {
        let mut store = store_with(&["MIRA"]);

        assert_eq!(
            store.record_gift("mira"),
            Ok(GiftOutcome::Recorded { weekly_count: 1 })
        );
        assert_eq!(store.record_gift("MIRA"), Ok(GiftOutcome::AlreadyGiftedToday));
        assert_eq!(store.get("MIRA").unwrap().weekly_count, 1);
    }

    #[test]
    fn weekly_limit_wins_over_daily_flag() {
        let mut store = store_with(&["MIRA"]);
        store.set_count("MIRA", 2).unwrap();

        // Flag is clear, but the limit still refuses the gift.
        assert!(!store.get("MIRA").unwrap().gift_received_today);
        assert_eq!(store.record_gift("MIRA"), Ok(GiftOutcome::WeeklyLimitReached));
        assert_eq!(store.get("MIRA").unwrap().weekly_count, 2);
    }

    #[test]
    fn unknown_npc_is_not_found() {
        let mut store = store_with(&["MIRA"]);
        assert_eq!(
            store.record_gift("nobody"),
            Err(StoreError::NotFound("NOBODY".to_string()))
        );
        assert_eq!(
            store.set_count("nobody", 1),
            Err(StoreError::NotFound("NOBODY".to_string()))
        );
    }

    #[test]
    fn set_count_round_trips_valid_values() {
        let mut store = store_with(&["MIRA"]);
        for count in 0..=2 {
            assert_eq!(store.set_count("MIRA", count), Ok(count as u8));
            assert_eq!(store.get("MIRA").unwrap().weekly_count, count as u8);
        }
    }

    #[test]
    fn set_count_rejects_out_of_range_without_mutation() {
        let mut store = store_with(&["MIRA"]);
        store.set_count("MIRA", 1).unwrap();

        assert_eq!(store.set_count("MIRA", 3), Err(StoreError::InvalidCount(3)));
        assert_eq!(store.set_count("MIRA", -1), Err(StoreError::InvalidCount(-1)));
        assert_eq!(store.get("MIRA").unwrap().weekly_count, 1);
    }

    #[test]
    fn set_count_does_not_touch_the_daily_flag() {
        let mut store = store_with(&["MIRA"]);
        store.record_gift("MIRA").unwrap();
        store.set_count("MIRA", 0).unwrap();
        assert!(store.get("MIRA").unwrap().gift_received_today);
    }

    #[test]
    fn remaining_excludes_maxed_and_gifted_npcs() {
        let mut catalog = Catalog::default();
        catalog.add_item("Apple", &[Season::Spring]);

        let mut store = store_with(&["ANA", "BEA", "CLEO"]);
        store.set_count("BEA", 2).unwrap();
        store.record_gift("CLEO").unwrap();

        let names: Vec<_> = store
            .remaining(Season::Spring, &catalog)
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, ["ANA"]);
    }

    #[test]
    fn remaining_matches_follow_catalog_order() {
        let mut catalog = Catalog::default();
        for name in ["Plum", "Apple", "Fig"] {
            catalog.add_item(name, &[Season::Fall]);
        }
        catalog.add_item("Rose", &[Season::Spring]);

        let mut store = PreferenceStore::default();
        // Preference order differs from catalog order on purpose.
        store.add_preference("MIRA", "Fig", PreferenceTier::Loved);
        store.add_preference("MIRA", "Plum", PreferenceTier::Loved);
        store.add_preference("MIRA", "Rose", PreferenceTier::Loved);
        store.add_preference("MIRA", "Apple", PreferenceTier::Liked);

        let remaining = store.remaining(Season::Fall, &catalog);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].loves, ["Plum", "Fig"]);
        assert_eq!(remaining[0].likes, ["Apple"]);
    }

    #[test]
    fn clear_daily_flags_leaves_weekly_counts() {
        let mut store = store_with(&["MIRA", "SOL"]);
        store.record_gift("MIRA").unwrap();
        store.clear_daily_flags();

        let mira = store.get("MIRA").unwrap();
        assert!(!mira.gift_received_today);
        assert_eq!(mira.weekly_count, 1);
    }
}
