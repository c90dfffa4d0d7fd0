mod app;

use anyhow::Result;
use std::fs::{self, OpenOptions};

use giftbook_core::{
    config::{self, AppConfig},
    Catalog, CatalogLoader, PreferenceStore, Tracker,
};
use tracing::warn;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;

    let loader = CatalogLoader::new(&config.data_path);
    let (catalog, store, startup_note) = match loader.load() {
        Ok((catalog, store)) => (catalog, store, None),
        Err(err) => {
            warn!("Catalog load failed: {err:#}");
            let note = format!(
                "Failed to open {}; starting with an empty catalog.",
                config.data_path.display()
            );
            (Catalog::default(), PreferenceStore::default(), Some(note))
        }
    };

    let mut app = app::GiftbookApp::new(Tracker::new(catalog, store));
    if let Some(note) = startup_note {
        app.set_startup_note(note);
    }
    app.run()
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("giftbook.log");

    let env_filter = EnvFilter::from_default_env();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
