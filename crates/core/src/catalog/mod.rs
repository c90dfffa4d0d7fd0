//! Seasonal item catalog and flat-file loading.

/// Catalog-file parsing utilities.
pub mod loader;

pub use loader::CatalogLoader;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Item, Season};

/// Read-only mapping from season to the items giftable in that season.
///
/// Built once at startup and never mutated afterwards. Items keep their
/// catalog-file order within a season, and duplicates across file lines are
/// preserved rather than deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: BTreeMap<Season, Vec<Item>>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// Append an item to every season it is valid in.
    pub fn add_item(&mut self, name: &str, seasons: &[Season]) {
        for season in seasons {
            self.items.entry(*season).or_default().push(Item::new(name));
        }
    }

    /// Items valid in the given season, in catalog order. Empty for seasons
    /// the file never mentioned.
    pub fn items_in(&self, season: Season) -> &[Item] {
        self.items.get(&season).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of item entries across all seasons.
    pub fn total_items(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// True when no line of the catalog file produced an item.
    pub fn is_empty(&self) -> bool {
        self.items.values().all(Vec::is_empty)
    }

    /// When the catalog was read from disk, if it was.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub(crate) fn stamp_loaded(&mut self) {
        self.loaded_at = Some(Utc::now());
    }
}
