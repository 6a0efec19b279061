// src/db/feedback_repository.rs
// DOCUMENTATION: Feedback database operations
// PURPOSE: Insert and filter user feedback on places

use crate::errors::PlacesError;
use crate::models::{CreateFeedbackRequest, Feedback};
use sqlx::SqlitePool;

pub struct FeedbackRepository;

impl FeedbackRepository {
    /// Create a new feedback row
    /// DOCUMENTATION: No referential check; unknown users or places are stored as given
    pub async fn create_feedback(
        pool: &SqlitePool,
        req: &CreateFeedbackRequest,
    ) -> Result<Feedback, PlacesError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (user_id, place_id, rating, "desc", date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, place_id, rating, "desc", date
            "#,
        )
        .bind(req.user_id)
        .bind(req.place_id)
        .bind(req.rating)
        .bind(&req.desc)
        .bind(req.date)
        .fetch_one(pool)
        .await
        .map_err(|e| PlacesError::from_db("Create feedback", e))?;

        log::info!(
            "Created feedback {} for place {} by user {}",
            feedback.id,
            feedback.place_id,
            feedback.user_id
        );
        Ok(feedback)
    }

    /// Get feedback for a place
    pub async fn find_by_place(
        pool: &SqlitePool,
        place_id: i64,
    ) -> Result<Vec<Feedback>, PlacesError> {
        sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, user_id, place_id, rating, "desc", date
            FROM feedback
            WHERE place_id = ?
            ORDER BY id
            "#,
        )
        .bind(place_id)
        .fetch_all(pool)
        .await
        .map_err(|e| PlacesError::from_db(&format!("Fetch feedback for place {}", place_id), e))
    }

    /// Get feedback written by a user
    pub async fn find_by_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Feedback>, PlacesError> {
        sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, user_id, place_id, rating, "desc", date
            FROM feedback
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| PlacesError::from_db(&format!("Fetch feedback for user {}", user_id), e))
    }
}
