// src/services/wishlist_service.rs

use crate::db::{PlaceRepository, WishlistRepository};
use crate::errors::PlacesError;
use crate::views::WishlistItem;
use sqlx::SqlitePool;

pub struct WishlistService;

impl WishlistService {
    /// Wishlist of a user with a card for each place
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<WishlistItem>, PlacesError> {
        let rows = WishlistRepository::find_by_user(pool, user_id).await?;

        let place_ids: Vec<i64> = rows.iter().map(|w| w.place_id).collect();
        let places = PlaceRepository::find_by_ids(pool, &place_ids).await?;

        Ok(rows
            .iter()
            .map(|w| WishlistItem::new(w, places.get(&w.place_id)))
            .collect())
    }
}
