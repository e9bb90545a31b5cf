use std::sync::Arc;

use anyhow::Result;

use cirrus_core::{Config, FileStore, PreferenceStore};
use cirrus_favorites::RecentSearchList;
use cirrus_weather::{SyncController, WeatherCache, WeatherClient};

fn main() -> Result<()> {
    // Initialize logging
    cirrus_core::init()?;

    let (config, _validation) = Config::load_validated()?;

    // The object graph is built once here and handed down; nothing below
    // reaches for globals.
    let store: Arc<dyn PreferenceStore> = Arc::new(FileStore::new(&config.config_dir));
    let client = Arc::new(WeatherClient::with_base_url(
        &config.weather.api_key,
        &config.weather.base_url,
    ));
    let cache = Arc::new(WeatherCache::new());
    let sync = SyncController::new(client, cache, Arc::clone(&store));
    let recent = RecentSearchList::load(store);

    tracing::info!(
        seeded = sync.snapshot().get().is_some(),
        recent_searches = recent.entries().len(),
        "Cirrus data layer ready"
    );

    println!("Cirrus - weather data layer");
    println!("Config directory: {}", config.config_dir.display());

    Ok(())
}
