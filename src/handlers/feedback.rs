// src/handlers/feedback.rs
// DOCUMENTATION: HTTP handlers for feedback
// PURPOSE: Per-user and per-place listings plus creation

use crate::errors::PlacesError;
use crate::models::{CreateFeedbackQuery, UserQuery};
use crate::response;
use crate::services::FeedbackService;
use actix_web::{web, Responder};
use sqlx::SqlitePool;

/// GET /feedback?user={id}
pub async fn user_feedback(
    pool: web::Data<SqlitePool>,
    query: web::Query<UserQuery>,
) -> Result<impl Responder, PlacesError> {
    let feedback = FeedbackService::list_for_user(pool.get_ref(), query.user).await?;
    Ok(response::ok(feedback))
}

/// GET /place/{id}/feedback
pub async fn place_feedback(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, PlacesError> {
    let feedback = FeedbackService::list_for_place(pool.get_ref(), path.into_inner()).await?;
    Ok(response::ok(feedback))
}

/// POST /place/{id}/feedback/create?user=&rate=&desc=
/// DOCUMENTATION: Rating range, description length and the existence of
/// the user or place are not checked
pub async fn create_feedback(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    query: web::Query<CreateFeedbackQuery>,
) -> Result<impl Responder, PlacesError> {
    let place_id = path.into_inner();
    let created = FeedbackService::create(pool.get_ref(), place_id, query.into_inner()).await?;
    Ok(response::ok(created))
}

/// Configuration for feedback routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::get().to(user_feedback))
        .route("/place/{id}/feedback", web::get().to(place_feedback))
        .route("/place/{id}/feedback/create", web::post().to(create_feedback));
}
