// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and repositories, assembles views

use crate::db::{FeedbackRepository, ImageRepository, PlaceRepository, UserRepository};
use crate::errors::PlacesError;
use crate::views::{PlaceDetail, PlaceListItem, PlaceReview};
use sqlx::SqlitePool;

pub struct PlaceService;

impl PlaceService {
    /// All places as listing cards
    pub async fn list_places(pool: &SqlitePool) -> Result<Vec<PlaceListItem>, PlacesError> {
        let places = PlaceRepository::get_all(pool).await?;
        Ok(places.iter().map(PlaceListItem::from).collect())
    }

    /// Detail page of one place, `None` when the id is unknown
    pub async fn get_place_detail(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<PlaceDetail>, PlacesError> {
        let place = match PlaceRepository::get_by_id(pool, id).await? {
            Some(place) => place,
            None => {
                log::debug!("Place {} not found", id);
                return Ok(None);
            }
        };

        let images = ImageRepository::find_by_place(pool, place.id).await?;
        let feedback = FeedbackRepository::find_by_place(pool, place.id).await?;

        let user_ids: Vec<i64> = feedback.iter().map(|f| f.user_id).collect();
        let users = UserRepository::find_by_ids(pool, &user_ids).await?;

        let reviews = feedback
            .iter()
            .map(|f| PlaceReview::new(f, Some(&place), users.get(&f.user_id)))
            .collect();

        Ok(Some(PlaceDetail::new(&place, &images, reviews)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::init_memory_pool;
    use crate::models::{CreateFeedbackRequest, CreateImageRequest, CreatePlaceRequest, CreateUserRequest};
    use chrono::NaiveDate;

    async fn seed_place(pool: &SqlitePool, name: &str) -> i64 {
        PlaceRepository::create_place(
            pool,
            &CreatePlaceRequest {
                id: None,
                name: name.to_string(),
                location: Some("Yogyakarta".to_string()),
                lat: Some(-7.6),
                long: Some(110.2),
                description: Some("Temple".to_string()),
                image_path: Some(format!("{}.jpg", name)),
                images: Vec::new(),
            },
        )
        .await
        .unwrap()
        .id
    }

    #[actix_rt::test]
    async fn test_list_places_returns_every_place_once() {
        let pool = init_memory_pool().await.unwrap();
        let a = seed_place(&pool, "Borobudur").await;
        let b = seed_place(&pool, "Prambanan").await;

        let items = PlaceService::list_places(&pool).await.unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(items[1].links.next, format!("/place/{}", b));
    }

    #[actix_rt::test]
    async fn test_detail_nests_images_and_reviews() {
        let pool = init_memory_pool().await.unwrap();
        let id = seed_place(&pool, "Borobudur").await;

        ImageRepository::create_image(
            &pool,
            &CreateImageRequest {
                place_id: id,
                image_path: "stupa.jpg".to_string(),
                content_description: Some("Stupa".to_string()),
            },
        )
        .await
        .unwrap();

        UserRepository::create_user(
            &pool,
            &CreateUserRequest {
                id: Some(5),
                username: Some("dewi".to_string()),
            },
        )
        .await
        .unwrap();

        for user_id in [5, 77] {
            FeedbackRepository::create_feedback(
                &pool,
                &CreateFeedbackRequest {
                    user_id,
                    place_id: id,
                    rating: 5.0,
                    desc: None,
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                },
            )
            .await
            .unwrap();
        }

        let detail = PlaceService::get_place_detail(&pool, id).await.unwrap().unwrap();
        assert_eq!(detail.id, id);
        assert_eq!(detail.image_url.len(), 1);
        assert_eq!(detail.reviews.len(), 2);
        assert_eq!(
            detail.reviews[0].user_detail.as_ref().unwrap().username.as_deref(),
            Some("dewi")
        );
        assert!(detail.reviews[1].user_detail.is_none());
        assert_eq!(detail.reviews[0].place_detail.as_ref().unwrap().name, "Borobudur");
    }

    #[actix_rt::test]
    async fn test_unknown_place_is_none() {
        let pool = init_memory_pool().await.unwrap();
        assert!(PlaceService::get_place_detail(&pool, 12).await.unwrap().is_none());
    }
}
