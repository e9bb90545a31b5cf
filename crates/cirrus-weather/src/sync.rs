//! Stale-while-revalidate sync controller.
//!
//! Single authoritative source for "the current weather": consults the
//! cache, refreshes through the client, and publishes through observables
//! that the UI binds to. Concurrent refreshes are never deduplicated or
//! cancelled; whichever completion publishes last wins.

use std::sync::Arc;

use tracing::instrument;

use cirrus_core::store::LAST_KNOWN_WEATHER_KEY;
use cirrus_core::{Observable, PreferenceStore};

use crate::cache::WeatherCache;
use crate::client::WeatherClient;
use crate::types::{ForecastSnapshot, WeatherError};

/// Forecast horizon requested on every refresh.
pub const FORECAST_DAYS: u8 = 10;

/// Cheap to clone; clones share the same cache and observable state.
#[derive(Clone)]
pub struct SyncController {
    client: Arc<WeatherClient>,
    cache: Arc<WeatherCache>,
    store: Arc<dyn PreferenceStore>,
    snapshot: Observable<Option<ForecastSnapshot>>,
    error: Observable<Option<String>>,
    loading: Observable<bool>,
}

impl SyncController {
    /// Construct the controller, seeding the published snapshot from the
    /// persisted last-known slot. Missing or undecodable bytes silently
    /// start with no snapshot.
    pub fn new(
        client: Arc<WeatherClient>,
        cache: Arc<WeatherCache>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let seeded = store.load(LAST_KNOWN_WEATHER_KEY).and_then(|bytes| {
            match serde_json::from_slice::<ForecastSnapshot>(&bytes) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    tracing::debug!("Ignoring undecodable persisted snapshot: {}", e);
                    None
                }
            }
        });

        Self {
            client,
            cache,
            store,
            snapshot: Observable::new(seeded),
            error: Observable::new(None),
            loading: Observable::new(false),
        }
    }

    /// The currently published snapshot. The most recently *settled* fetch,
    /// not necessarily the most recently issued one.
    pub fn snapshot(&self) -> &Observable<Option<ForecastSnapshot>> {
        &self.snapshot
    }

    /// Error slot for the inline banner; a set error never clears the
    /// published snapshot.
    pub fn error(&self) -> &Observable<Option<String>> {
        &self.error
    }

    pub fn loading(&self) -> &Observable<bool> {
        &self.loading
    }

    /// Request weather for a query.
    ///
    /// Cache hit: the cached snapshot is published and returned immediately,
    /// and an unconditional background refresh is spawned for the same query.
    /// The hit never short-circuits the refresh; cache entries carry no TTL.
    ///
    /// Cache miss: the caller awaits the network round trip.
    #[instrument(skip(self), level = "info")]
    pub async fn request(&self, query: &str) -> Result<ForecastSnapshot, WeatherError> {
        if let Some(cached) = self.cache.get(query) {
            self.snapshot.set(Some(cached.clone()));

            let controller = self.clone();
            let query = query.to_string();
            tokio::spawn(async move {
                // Errors land in the error slot; nobody awaits this refresh.
                let _ = controller.refresh(&query).await;
            });

            return Ok(cached);
        }

        self.refresh(query).await
    }

    /// One full-replace refresh. On success the cache entry is written,
    /// the snapshot is published, the error slot clears, and the snapshot
    /// is persisted (after the cache write, not atomically with it). On
    /// failure only the error slot changes.
    async fn refresh(&self, query: &str) -> Result<ForecastSnapshot, WeatherError> {
        self.loading.set(true);
        let result = self.client.fetch_forecast(query, FORECAST_DAYS).await;
        self.loading.set(false);

        match result {
            Ok(fresh) => {
                tracing::info!("Refreshed weather for {:?}", query);
                self.cache.insert(query, fresh.clone());
                self.snapshot.set(Some(fresh.clone()));
                self.error.set(None);
                self.persist(&fresh);
                Ok(fresh)
            }
            Err(e) => {
                tracing::error!("Weather refresh failed for {:?}: {}", query, e);
                self.error.set(Some(e.user_message()));
                Err(e)
            }
        }
    }

    fn persist(&self, snapshot: &ForecastSnapshot) {
        match serde_json::to_vec(snapshot) {
            Ok(bytes) => self.store.save(LAST_KNOWN_WEATHER_KEY, &bytes),
            Err(e) => tracing::warn!("Failed to encode snapshot for persistence: {}", e),
        }
    }
}
