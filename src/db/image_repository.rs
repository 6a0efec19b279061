// src/db/image_repository.rs
// DOCUMENTATION: Image database operations
// PURPOSE: Gallery images belonging to a place

use crate::errors::PlacesError;
use crate::models::{CreateImageRequest, Image};
use sqlx::SqlitePool;

pub struct ImageRepository;

impl ImageRepository {
    /// Create a new image for a place
    pub async fn create_image(
        pool: &SqlitePool,
        req: &CreateImageRequest,
    ) -> Result<Image, PlacesError> {
        sqlx::query_as::<_, Image>(
            r#"
            INSERT INTO image (place_id, image_path, content_description)
            VALUES (?, ?, ?)
            RETURNING id, place_id, image_path, content_description
            "#,
        )
        .bind(req.place_id)
        .bind(&req.image_path)
        .bind(&req.content_description)
        .fetch_one(pool)
        .await
        .map_err(|e| PlacesError::from_db("Create image", e))
    }

    /// Get images for a place
    /// DOCUMENTATION: Fetch all images of a specific place in insertion order
    pub async fn find_by_place(
        pool: &SqlitePool,
        place_id: i64,
    ) -> Result<Vec<Image>, PlacesError> {
        sqlx::query_as::<_, Image>(
            r#"
            SELECT id, place_id, image_path, content_description
            FROM image
            WHERE place_id = ?
            ORDER BY id
            "#,
        )
        .bind(place_id)
        .fetch_all(pool)
        .await
        .map_err(|e| PlacesError::from_db(&format!("Fetch images for place {}", place_id), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::init_memory_pool;

    fn image(place_id: i64, path: &str) -> CreateImageRequest {
        CreateImageRequest {
            place_id,
            image_path: path.to_string(),
            content_description: Some(format!("view of {}", path)),
        }
    }

    #[actix_rt::test]
    async fn test_images_filtered_by_place() {
        let pool = init_memory_pool().await.unwrap();
        ImageRepository::create_image(&pool, &image(1, "a.jpg")).await.unwrap();
        ImageRepository::create_image(&pool, &image(2, "b.jpg")).await.unwrap();
        ImageRepository::create_image(&pool, &image(1, "c.jpg")).await.unwrap();

        let images = ImageRepository::find_by_place(&pool, 1).await.unwrap();
        let paths: Vec<_> = images.iter().filter_map(|i| i.image_path.as_deref()).collect();
        assert_eq!(paths, vec!["a.jpg", "c.jpg"]);
    }

    #[actix_rt::test]
    async fn test_duplicate_image_path_rejected() {
        let pool = init_memory_pool().await.unwrap();
        ImageRepository::create_image(&pool, &image(1, "a.jpg")).await.unwrap();

        let dup = ImageRepository::create_image(&pool, &image(2, "a.jpg")).await;
        assert!(matches!(dup, Err(PlacesError::ConstraintViolation(_))));
    }
}
