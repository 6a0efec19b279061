// src/handlers/wishlist.rs

use crate::errors::PlacesError;
use crate::models::UserQuery;
use crate::response;
use crate::services::WishlistService;
use actix_web::{web, Responder};
use sqlx::SqlitePool;

/// GET /wishlist?user={id}
pub async fn wishlist(
    pool: web::Data<SqlitePool>,
    query: web::Query<UserQuery>,
) -> Result<impl Responder, PlacesError> {
    let items = WishlistService::list_for_user(pool.get_ref(), query.user).await?;
    Ok(response::ok(items))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/wishlist", web::get().to(wishlist));
}
