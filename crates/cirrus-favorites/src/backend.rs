//! Favorites backend collaborator.
//!
//! Favorites live in the hosted database and are never cached locally; the
//! controller reads and writes through this trait only.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cirrus_core::BackendError;

/// A bookmarked city row. `id` and `created_at` are assigned by the
/// backend and absent until the row is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteCity {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub city_name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl FavoriteCity {
    /// A not-yet-persisted row for insertion.
    pub fn new(user_id: Uuid, city_name: &str) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            city_name: city_name.to_string(),
            created_at: None,
        }
    }
}

pub trait FavoritesBackend {
    /// Id of the signed-in user, if any. Every operation fails closed
    /// without one.
    fn signed_in_user_id(&self) -> Option<Uuid>;

    fn list_favorites(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FavoriteCity>, BackendError>> + Send;

    fn insert_favorite(
        &self,
        favorite: FavoriteCity,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    fn delete_favorite(&self, id: Uuid) -> impl Future<Output = Result<(), BackendError>> + Send;
}
