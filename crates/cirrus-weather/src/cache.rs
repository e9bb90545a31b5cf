//! Process-lifetime snapshot cache.
//!
//! Keys are the query strings verbatim: case-sensitive, no geocoding
//! normalization, so `"London"` and `"london"` are distinct entries and a
//! `"lat,lon"` pair is just another key. Entries never expire and are never
//! evicted; staleness is advisory and the sync controller always refreshes
//! behind a hit.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::types::ForecastSnapshot;

#[derive(Debug, Default)]
pub struct WeatherCache {
    entries: RwLock<HashMap<String, ForecastSnapshot>>,
}

impl WeatherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-known snapshot for a query, if any.
    pub fn get(&self, query: &str) -> Option<ForecastSnapshot> {
        self.entries.read().get(query).cloned()
    }

    /// Replace the entry for a query with a fresher snapshot.
    pub fn insert(&self, query: &str, snapshot: ForecastSnapshot) {
        self.entries.write().insert(query.to_string(), snapshot);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
