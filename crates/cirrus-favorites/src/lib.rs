//! Favorites and city search for Cirrus.
//!
//! Thresholded search-as-you-type against the weather provider, bookmarks
//! owned by the hosted backend, and the bounded recent-searches list.

pub mod backend;
pub mod recent;
pub mod search;

pub use backend::{FavoriteCity, FavoritesBackend};
pub use recent::{RecentSearchList, MAX_RECENT_SEARCHES};
pub use search::{SearchController, MIN_QUERY_LEN, SHOW_ALL_QUERY};
