//! Search-as-you-type over the weather provider plus favorites management.

use std::sync::Arc;

use uuid::Uuid;

use cirrus_core::Observable;
use cirrus_weather::{Location, WeatherClient};

use crate::backend::{FavoriteCity, FavoritesBackend};
use crate::recent::RecentSearchList;

/// Shortest query that triggers a network lookup.
pub const MIN_QUERY_LEN: usize = 3;

/// Sentinel query meaning "show all suggested cities" without touching the
/// network.
pub const SHOW_ALL_QUERY: &str = " ";

pub struct SearchController<B> {
    backend: B,
    client: Arc<WeatherClient>,
    recent: RecentSearchList,
    suggested_cities: Vec<String>,
    results: Observable<Vec<Location>>,
    favorites: Observable<Vec<FavoriteCity>>,
    error: Observable<Option<String>>,
    loading: Observable<bool>,
}

impl<B: FavoritesBackend> SearchController<B> {
    pub fn new(
        backend: B,
        client: Arc<WeatherClient>,
        recent: RecentSearchList,
        suggested_cities: Vec<String>,
    ) -> Self {
        Self {
            backend,
            client,
            recent,
            suggested_cities,
            results: Observable::new(Vec::new()),
            favorites: Observable::new(Vec::new()),
            error: Observable::new(None),
            loading: Observable::new(false),
        }
    }

    pub fn results(&self) -> &Observable<Vec<Location>> {
        &self.results
    }

    pub fn favorites(&self) -> &Observable<Vec<FavoriteCity>> {
        &self.favorites
    }

    pub fn error(&self) -> &Observable<Option<String>> {
        &self.error
    }

    pub fn loading(&self) -> &Observable<bool> {
        &self.loading
    }

    pub fn recent_searches(&self) -> &RecentSearchList {
        &self.recent
    }

    pub fn suggested_cities(&self) -> &[String] {
        &self.suggested_cities
    }

    /// React to a keystroke.
    ///
    /// Empty clears the results; the single-space sentinel publishes the
    /// suggested cities as pseudo-results; anything shorter than
    /// [`MIN_QUERY_LEN`] does nothing; a qualifying query issues exactly one
    /// lookup. Overlapping lookups are not cancelled; the last completion
    /// wins.
    pub async fn set_query(&self, query: &str) {
        if query.is_empty() {
            self.results.set(Vec::new());
            return;
        }
        if query == SHOW_ALL_QUERY {
            self.results.set(self.pseudo_results());
            return;
        }
        if query.chars().count() < MIN_QUERY_LEN {
            return;
        }
        self.perform_search(query).await;
    }

    fn pseudo_results(&self) -> Vec<Location> {
        self.suggested_cities
            .iter()
            .map(|city| Location {
                name: city.clone(),
                region: "Global".to_string(),
                country: "World".to_string(),
                lat: 0.0,
                lon: 0.0,
                tz_id: String::new(),
                localtime_epoch: 0,
                localtime: String::new(),
            })
            .collect()
    }

    async fn perform_search(&self, query: &str) {
        self.loading.set(true);
        match self.client.fetch_current(query).await {
            Ok(snapshot) => self.results.set(vec![snapshot.location]),
            // Failed lookups leave the previous results in place.
            Err(e) => tracing::debug!("Search failed for {:?}: {}", query, e),
        }
        self.loading.set(false);
    }

    /// Re-read the favorites list from the backend. Fails closed to an
    /// empty list when nobody is signed in.
    pub async fn refresh_favorites(&self) {
        let Some(user_id) = self.backend.signed_in_user_id() else {
            self.favorites.set(Vec::new());
            return;
        };

        self.loading.set(true);
        match self.backend.list_favorites(user_id).await {
            Ok(list) => self.favorites.set(list),
            Err(e) => self.error.set(Some(e.to_string())),
        }
        self.loading.set(false);
    }

    /// Bookmark a city: insert, re-read the full list (no optimistic local
    /// insert), then record the search. A no-op when signed out.
    pub async fn add_favorite(&self, city: &str) {
        let Some(user_id) = self.backend.signed_in_user_id() else {
            tracing::debug!("Ignoring add_favorite with no signed-in user");
            return;
        };

        match self
            .backend
            .insert_favorite(FavoriteCity::new(user_id, city))
            .await
        {
            Ok(()) => {
                self.refresh_favorites().await;
                self.recent.insert(city);
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub async fn remove_favorite(&self, id: Uuid) {
        match self.backend.delete_favorite(id).await {
            Ok(()) => self.refresh_favorites().await,
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    /// Remove the city if it is already bookmarked, bookmark it otherwise.
    pub async fn toggle_favorite(&self, city: &str) {
        let Some(user_id) = self.backend.signed_in_user_id() else {
            return;
        };

        match self.backend.list_favorites(user_id).await {
            Ok(list) => {
                if let Some(existing) = list.iter().find(|f| f.city_name == city) {
                    if let Some(id) = existing.id {
                        self.remove_favorite(id).await;
                    }
                } else {
                    self.add_favorite(city).await;
                }
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
