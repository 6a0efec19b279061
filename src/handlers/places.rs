// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return enveloped responses

use crate::errors::PlacesError;
use crate::models::HomeQuery;
use crate::response;
use crate::services::PlaceService;
use actix_web::{web, Responder};
use sqlx::SqlitePool;

/// GET /home
/// List every place as a card; `user` is accepted but not used
pub async fn home(
    pool: web::Data<SqlitePool>,
    _query: web::Query<HomeQuery>,
) -> Result<impl Responder, PlacesError> {
    let places = PlaceService::list_places(pool.get_ref()).await?;
    Ok(response::ok(places))
}

/// GET /place/{id}
/// Detail page; an unknown id yields `data: null`
pub async fn get_place(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, PlacesError> {
    let detail = PlaceService::get_place_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(response::ok(detail))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/home", web::get().to(home))
        .route("/place/{id}", web::get().to(get_place));
}
