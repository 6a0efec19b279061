// src/services/feedback_service.rs
// DOCUMENTATION: Business logic for feedback
// PURPOSE: Listing per user / per place and creation dated today

use crate::db::{FeedbackRepository, PlaceRepository, UserRepository};
use crate::errors::PlacesError;
use crate::models::{CreateFeedbackQuery, CreateFeedbackRequest};
use crate::views::{FeedbackDetail, PlaceFeedback, UserFeedback};
use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;

pub struct FeedbackService;

impl FeedbackService {
    /// Feedback written by a user, each with its place summary
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<UserFeedback>, PlacesError> {
        let feedback = FeedbackRepository::find_by_user(pool, user_id).await?;

        let place_ids: Vec<i64> = feedback.iter().map(|f| f.place_id).collect();
        let places = PlaceRepository::find_by_ids(pool, &place_ids).await?;

        Ok(feedback
            .iter()
            .map(|f| UserFeedback::new(f, places.get(&f.place_id)))
            .collect())
    }

    /// Feedback left on a place, each with its author summary
    pub async fn list_for_place(
        pool: &SqlitePool,
        place_id: i64,
    ) -> Result<Vec<PlaceFeedback>, PlacesError> {
        let feedback = FeedbackRepository::find_by_place(pool, place_id).await?;

        let user_ids: Vec<i64> = feedback.iter().map(|f| f.user_id).collect();
        let users = UserRepository::find_by_ids(pool, &user_ids).await?;

        Ok(feedback
            .iter()
            .map(|f| PlaceFeedback::new(f, users.get(&f.user_id)))
            .collect())
    }

    /// Store new feedback dated with today's local calendar date
    pub async fn create(
        pool: &SqlitePool,
        place_id: i64,
        query: CreateFeedbackQuery,
    ) -> Result<FeedbackDetail, PlacesError> {
        Self::create_on(pool, place_id, query, Local::now().date_naive()).await
    }

    /// Store new feedback with an explicit date
    /// DOCUMENTATION: Neither user nor place has to exist; missing ones
    /// serialize as null in the returned view. The rating must be a finite
    /// number, its range is not checked
    pub async fn create_on(
        pool: &SqlitePool,
        place_id: i64,
        query: CreateFeedbackQuery,
        date: NaiveDate,
    ) -> Result<FeedbackDetail, PlacesError> {
        if !query.rate.is_finite() {
            return Err(PlacesError::ValidationError(format!(
                "rate must be a finite number, got {}",
                query.rate
            )));
        }

        let req = CreateFeedbackRequest {
            user_id: query.user,
            place_id,
            rating: query.rate,
            desc: query.desc,
            date,
        };

        let feedback = FeedbackRepository::create_feedback(pool, &req).await?;
        let place = PlaceRepository::get_by_id(pool, feedback.place_id).await?;
        let user = UserRepository::get_by_id(pool, feedback.user_id).await?;

        Ok(FeedbackDetail::new(&feedback, place.as_ref(), user.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::init_memory_pool;
    use crate::models::CreatePlaceRequest;

    fn query(user: i64, rate: f64, desc: &str) -> CreateFeedbackQuery {
        CreateFeedbackQuery {
            user,
            rate,
            desc: Some(desc.to_string()),
        }
    }

    #[actix_rt::test]
    async fn test_create_for_unknown_place_and_user() {
        let pool = init_memory_pool().await.unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();

        let created = FeedbackService::create_on(&pool, 404, query(9, 2.0, "Closed"), date)
            .await
            .unwrap();

        assert_eq!(created.place_id, 404);
        assert_eq!(created.user_id, 9);
        assert_eq!(created.date, date);
        assert!(created.place_detail.is_none());
        assert!(created.user_detail.is_none());
    }

    #[actix_rt::test]
    async fn test_non_finite_rate_rejected() {
        let pool = init_memory_pool().await.unwrap();

        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = FeedbackService::create(&pool, 1, query(1, rate, "x")).await;
            assert!(matches!(result, Err(PlacesError::ValidationError(_))));
        }
        assert!(FeedbackRepository::find_by_place(&pool, 1).await.unwrap().is_empty());

        // Out-of-range but finite ratings are stored as given
        let created = FeedbackService::create(&pool, 1, query(1, 11.0, "x")).await.unwrap();
        assert_eq!(created.rating, 11.0);
    }

    #[actix_rt::test]
    async fn test_create_uses_today() {
        let pool = init_memory_pool().await.unwrap();
        let created = FeedbackService::create(&pool, 1, query(5, 4.5, "Nice"))
            .await
            .unwrap();
        assert_eq!(created.date, Local::now().date_naive());
    }

    #[actix_rt::test]
    async fn test_lists_are_scoped() {
        let pool = init_memory_pool().await.unwrap();
        let place = PlaceRepository::create_place(
            &pool,
            &CreatePlaceRequest {
                id: None,
                name: "Beach".to_string(),
                location: None,
                lat: None,
                long: None,
                description: None,
                image_path: None,
                images: Vec::new(),
            },
        )
        .await
        .unwrap();

        FeedbackService::create(&pool, place.id, query(1, 5.0, "Great")).await.unwrap();
        FeedbackService::create(&pool, place.id, query(2, 3.0, "Ok")).await.unwrap();
        FeedbackService::create(&pool, place.id + 1, query(1, 1.0, "Meh")).await.unwrap();

        let mine = FeedbackService::list_for_user(&pool, 1).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].place_detail.as_ref().unwrap().name, "Beach");
        assert!(mine[1].place_detail.is_none());

        let here = FeedbackService::list_for_place(&pool, place.id).await.unwrap();
        let descs: Vec<_> = here.iter().filter_map(|f| f.desc.as_deref()).collect();
        assert_eq!(descs, vec!["Great", "Ok"]);
    }
}
