// src/views/feedback.rs
// DOCUMENTATION: Feedback projections
// PURPOSE: One struct per endpoint, trimmed to what that endpoint exposes.
// Missing users or places serialize as null.

use super::PlaceSummary;
use crate::models::{Feedback, Place, User};
use chrono::NaiveDate;
use serde::Serialize;

/// `{id, username}` nested inside feedback
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Full feedback record, returned by the create endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackDetail {
    pub id: i64,
    pub user_id: i64,
    pub place_id: i64,
    pub rating: f64,
    pub desc: Option<String>,
    pub date: NaiveDate,
    pub place_detail: Option<PlaceSummary>,
    pub user_detail: Option<UserSummary>,
}

impl FeedbackDetail {
    pub fn new(feedback: &Feedback, place: Option<&Place>, user: Option<&User>) -> Self {
        FeedbackDetail {
            id: feedback.id,
            user_id: feedback.user_id,
            place_id: feedback.place_id,
            rating: feedback.rating,
            desc: feedback.desc.clone(),
            date: feedback.date,
            place_detail: place.map(PlaceSummary::from),
            user_detail: user.map(UserSummary::from),
        }
    }
}

/// Review nested in the place detail page (no foreign keys)
#[derive(Debug, Clone, Serialize)]
pub struct PlaceReview {
    pub id: i64,
    pub rating: f64,
    pub desc: Option<String>,
    pub date: NaiveDate,
    pub place_detail: Option<PlaceSummary>,
    pub user_detail: Option<UserSummary>,
}

impl PlaceReview {
    pub fn new(feedback: &Feedback, place: Option<&Place>, user: Option<&User>) -> Self {
        PlaceReview {
            id: feedback.id,
            rating: feedback.rating,
            desc: feedback.desc.clone(),
            date: feedback.date,
            place_detail: place.map(PlaceSummary::from),
            user_detail: user.map(UserSummary::from),
        }
    }
}

/// GET /feedback?user= entry: the user is implied, the place is spelled out
#[derive(Debug, Clone, Serialize)]
pub struct UserFeedback {
    pub id: i64,
    pub rating: f64,
    pub desc: Option<String>,
    pub date: NaiveDate,
    pub place_detail: Option<PlaceSummary>,
}

impl UserFeedback {
    pub fn new(feedback: &Feedback, place: Option<&Place>) -> Self {
        UserFeedback {
            id: feedback.id,
            rating: feedback.rating,
            desc: feedback.desc.clone(),
            date: feedback.date,
            place_detail: place.map(PlaceSummary::from),
        }
    }
}

/// GET /place/{id}/feedback entry: the place is implied, the author is spelled out
#[derive(Debug, Clone, Serialize)]
pub struct PlaceFeedback {
    pub id: i64,
    pub rating: f64,
    pub desc: Option<String>,
    pub date: NaiveDate,
    pub user_detail: Option<UserSummary>,
}

impl PlaceFeedback {
    pub fn new(feedback: &Feedback, user: Option<&User>) -> Self {
        PlaceFeedback {
            id: feedback.id,
            rating: feedback.rating,
            desc: feedback.desc.clone(),
            date: feedback.date,
            user_detail: user.map(UserSummary::from),
        }
    }
}
