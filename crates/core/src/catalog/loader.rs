//! Parses the flat catalog file into a [`Catalog`] and a populated
//! [`PreferenceStore`].
//!
//! One record per line: `seasons;item_name;loved_by;liked_by`, e.g.
//! `aaa.;Apple;V(ALICE,BOB);K(CAROL)`. Parsing is deliberately best-effort:
//! malformed lines or fields degrade to "absent" instead of failing the load.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::{
    models::Season,
    store::{PreferenceStore, PreferenceTier},
    Catalog,
};

/// Mask character marking an item as valid in a season.
const SEASON_ACTIVE: char = 'a';

/// Loads the catalog data file from a fixed path.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    /// Build a loader for the given data file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the data file.
    ///
    /// An unreadable file is an `Err`; callers are expected to degrade to an
    /// empty catalog and surface a warning rather than abort (the file being
    /// missing is a routine condition on first run).
    pub fn load(&self) -> Result<(Catalog, PreferenceStore)> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read catalog file {}", self.path.display()))?;
        let (mut catalog, store) = load_lines(contents.lines());
        catalog.stamp_loaded();
        Ok((catalog, store))
    }
}

/// Parse catalog lines into a catalog and preference store.
///
/// Pure parsing core shared by [`CatalogLoader::load`] and tests.
pub fn load_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> (Catalog, PreferenceStore) {
    let mut catalog = Catalog::default();
    let mut store = PreferenceStore::default();

    for (number, raw) in lines.into_iter().enumerate() {
        let line = raw.trim_end_matches('\r');
        let mut fields = line.split(';');
        let (mask, item_name) = match (fields.next(), fields.next()) {
            (Some(mask), Some(name)) if !name.is_empty() => (mask, name),
            _ => {
                if !line.trim().is_empty() {
                    warn!(line = number + 1, "skipping malformed catalog line");
                }
                continue;
            }
        };
        let loves = parse_npc_list(fields.next().unwrap_or(""));
        let likes = parse_npc_list(fields.next().unwrap_or(""));

        catalog.add_item(item_name, &parse_season_mask(mask));
        for npc in &loves {
            store.add_preference(npc, item_name, PreferenceTier::Loved);
        }
        for npc in &likes {
            store.add_preference(npc, item_name, PreferenceTier::Liked);
        }
    }

    (catalog, store)
}

/// Decode the positional season mask.
///
/// Positions 0..4 correspond to [`Season::ALL`]; anything beyond the fourth
/// character is ignored and a short mask simply marks the missing seasons
/// absent.
fn parse_season_mask(mask: &str) -> Vec<Season> {
    mask.chars()
        .zip(Season::ALL)
        .filter(|(ch, _)| *ch == SEASON_ACTIVE)
        .map(|(_, season)| season)
        .collect()
}

static NPC_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("invalid NPC list regex"));

/// Extract NPC names from a `<tag>(<comma-separated-list>)` field.
///
/// Only the wrapping parentheses are significant; the tag character is not
/// interpreted. Fields without parentheses yield an empty list, as do empty
/// parentheses. Entries are whitespace-stripped and blanks from trailing
/// commas discarded.
fn parse_npc_list(field: &str) -> Vec<String> {
    // A well-formed field is at least `V(x)` long.
    if field.len() < 4 {
        return Vec::new();
    }
    let Some(caps) = NPC_LIST_RE.captures(field) else {
        return Vec::new();
    };
    caps[1]
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
