// src/models/wishlist.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Join row: a place a user wants to visit
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Wishlist {
    pub id: i64,
    pub user_id: i64,
    pub place_id: i64,
}

/// Request to add a place to a user's wishlist (seeding only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWishlistRequest {
    pub user_id: i64,
    pub place_id: i64,
}
