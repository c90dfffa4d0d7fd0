#![warn(clippy::all, missing_docs)]

//! Core domain logic for the Giftbook tracker.
//!
//! This crate hosts the data models, configuration handling, catalog
//! loading, and the gift-ledger rules used by the terminal UI and any
//! future frontends. Nothing here touches the terminal.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod ledger;
pub mod models;
pub mod store;

pub use catalog::{Catalog, CatalogLoader};
pub use clock::Clock;
pub use config::AppConfig;
pub use ledger::{SeasonChange, Tracker};
pub use models::{Item, NpcRecord, Season, WEEKDAYS};
pub use store::{GiftOutcome, PreferenceStore, RemainingGifts, StoreError, WEEKLY_GIFT_LIMIT};
