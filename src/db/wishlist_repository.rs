// src/db/wishlist_repository.rs
// DOCUMENTATION: Wishlist database operations
// PURPOSE: User to place join rows

use crate::errors::PlacesError;
use crate::models::{CreateWishlistRequest, Wishlist};
use sqlx::SqlitePool;

pub struct WishlistRepository;

impl WishlistRepository {
    /// Add a place to a user's wishlist
    /// DOCUMENTATION: A (user, place) pair already present is a ConstraintViolation
    pub async fn create_wishlist(
        pool: &SqlitePool,
        req: &CreateWishlistRequest,
    ) -> Result<Wishlist, PlacesError> {
        sqlx::query_as::<_, Wishlist>(
            r#"
            INSERT INTO wishlist (user_id, place_id)
            VALUES (?, ?)
            RETURNING id, user_id, place_id
            "#,
        )
        .bind(req.user_id)
        .bind(req.place_id)
        .fetch_one(pool)
        .await
        .map_err(|e| PlacesError::from_db("Create wishlist", e))
    }

    /// Wishlist rows owned by a user
    pub async fn find_by_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Wishlist>, PlacesError> {
        sqlx::query_as::<_, Wishlist>(
            "SELECT id, user_id, place_id FROM wishlist WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| PlacesError::from_db(&format!("Fetch wishlist for user {}", user_id), e))
    }
}
