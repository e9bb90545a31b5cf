//! Bounded recent-search list, persisted through the preference store.

use std::sync::Arc;

use cirrus_core::store::RECENT_SEARCHES_KEY;
use cirrus_core::{Observable, PreferenceStore};

/// Upper bound on remembered searches.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Most-recent-first list of searched city names. Inserting a name already
/// present is a no-op: the first occurrence keeps its position.
pub struct RecentSearchList {
    store: Arc<dyn PreferenceStore>,
    entries: Observable<Vec<String>>,
}

impl RecentSearchList {
    /// Reload the persisted list; unreadable or missing bytes start empty.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let initial: Vec<String> = store
            .load(RECENT_SEARCHES_KEY)
            .and_then(|bytes| match serde_json::from_slice(&bytes) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    tracing::debug!("Ignoring unreadable recent searches: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        Self {
            store,
            entries: Observable::new(initial),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.get()
    }

    /// Observable view for UI binding.
    pub fn watch(&self) -> &Observable<Vec<String>> {
        &self.entries
    }

    /// Record a search, evicting the oldest entry past the bound.
    pub fn insert(&self, city: &str) {
        let mut entries = self.entries.get();
        if entries.iter().any(|existing| existing == city) {
            return;
        }
        entries.insert(0, city.to_string());
        entries.truncate(MAX_RECENT_SEARCHES);
        self.persist(&entries);
        self.entries.set(entries);
    }

    pub fn clear(&self) {
        self.persist(&[]);
        self.entries.set(Vec::new());
    }

    fn persist(&self, entries: &[String]) {
        match serde_json::to_vec(entries) {
            Ok(bytes) => self.store.save(RECENT_SEARCHES_KEY, &bytes),
            Err(e) => tracing::warn!("Failed to encode recent searches: {}", e),
        }
    }
}
