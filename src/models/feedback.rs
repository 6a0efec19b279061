// src/models/feedback.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's rating and comment about a place
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: i64,
    pub user_id: i64,
    pub place_id: i64,
    pub rating: f64,
    pub desc: Option<String>,
    pub date: NaiveDate,
}

/// Values for a new feedback row
/// DOCUMENTATION: `date` is assigned by the service, never by the caller
#[derive(Debug, Clone)]
pub struct CreateFeedbackRequest {
    pub user_id: i64,
    pub place_id: i64,
    pub rating: f64,
    pub desc: Option<String>,
    pub date: NaiveDate,
}

/// Query string of POST /place/{id}/feedback/create
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedbackQuery {
    pub user: i64,
    pub rate: f64,
    pub desc: Option<String>,
}

/// `?user=<id>` filter shared by the per-user listings
#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    pub user: i64,
}

/// `?user=<id>` on /home, accepted and ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeQuery {
    pub user: Option<String>,
}
