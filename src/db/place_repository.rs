// src/db/place_repository.rs
// DOCUMENTATION: Database access layer for places
// PURPOSE: Abstract place queries from business logic

use crate::db::{unique_ids, ID_BATCH_SIZE};
use crate::errors::PlacesError;
use crate::models::{CreatePlaceRequest, Place};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

const PLACE_COLUMNS: &str = "id, name, location, lat, long, description, image_path";

/// PlaceRepository: All database operations for places
/// DOCUMENTATION: Uses query_as for type-safe SQL queries
pub struct PlaceRepository;

impl PlaceRepository {
    /// Create new place in database
    /// DOCUMENTATION: Inserts place and returns created record.
    /// A duplicate name or image_path surfaces as ConstraintViolation
    pub async fn create_place(
        pool: &SqlitePool,
        req: &CreatePlaceRequest,
    ) -> Result<Place, PlacesError> {
        let place = sqlx::query_as::<_, Place>(&format!(
            r#"
            INSERT INTO places (id, name, location, lat, long, description, image_path)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            PLACE_COLUMNS
        ))
        .bind(req.id)
        .bind(&req.name)
        .bind(&req.location)
        .bind(req.lat)
        .bind(req.long)
        .bind(&req.description)
        .bind(&req.image_path)
        .fetch_one(pool)
        .await
        .map_err(|e| PlacesError::from_db("Create place", e))?;

        log::info!("Created place {} ({})", place.id, place.name);
        Ok(place)
    }

    /// Fetch every place, ordered by id
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Place>, PlacesError> {
        sqlx::query_as::<_, Place>(&format!("SELECT {} FROM places ORDER BY id", PLACE_COLUMNS))
            .fetch_all(pool)
            .await
            .map_err(|e| PlacesError::from_db("Fetch places", e))
    }

    /// Get a place by primary key
    /// DOCUMENTATION: A missing row is `Ok(None)`; the caller decides what that means
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Place>, PlacesError> {
        sqlx::query_as::<_, Place>(&format!(
            "SELECT {} FROM places WHERE id = ?",
            PLACE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| PlacesError::from_db("Fetch place", e))
    }

    /// Batch lookup keyed by id, used to nest place summaries
    pub async fn find_by_ids(
        pool: &SqlitePool,
        ids: &[i64],
    ) -> Result<HashMap<i64, Place>, PlacesError> {
        let mut found = HashMap::new();

        for chunk in unique_ids(ids).chunks(ID_BATCH_SIZE) {
            let mut builder = QueryBuilder::<Sqlite>::new(format!(
                "SELECT {} FROM places WHERE id IN (",
                PLACE_COLUMNS
            ));
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let places = builder
                .build_query_as::<Place>()
                .fetch_all(pool)
                .await
                .map_err(|e| PlacesError::from_db("Fetch places by id", e))?;

            found.extend(places.into_iter().map(|p| (p.id, p)));
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::init_memory_pool;

    fn beach(name: &str, image_path: &str) -> CreatePlaceRequest {
        CreatePlaceRequest {
            id: None,
            name: name.to_string(),
            location: Some("Bali".to_string()),
            lat: Some(-8.7),
            long: Some(115.17),
            description: Some("White sand".to_string()),
            image_path: Some(image_path.to_string()),
            images: Vec::new(),
        }
    }

    #[actix_rt::test]
    async fn test_create_and_fetch_place() {
        let pool = init_memory_pool().await.unwrap();
        let created = PlaceRepository::create_place(&pool, &beach("Kuta", "kuta.jpg"))
            .await
            .unwrap();

        let fetched = PlaceRepository::get_by_id(&pool, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Kuta");
        assert_eq!(fetched.lat, Some(-8.7));
        assert!(PlaceRepository::get_by_id(&pool, created.id + 1)
            .await
            .unwrap()
            .is_none());
    }

    #[actix_rt::test]
    async fn test_unique_name_and_image_path() {
        let pool = init_memory_pool().await.unwrap();
        PlaceRepository::create_place(&pool, &beach("Kuta", "kuta.jpg"))
            .await
            .unwrap();

        let same_name = PlaceRepository::create_place(&pool, &beach("Kuta", "other.jpg")).await;
        assert!(matches!(same_name, Err(PlacesError::ConstraintViolation(_))));

        let same_image = PlaceRepository::create_place(&pool, &beach("Sanur", "kuta.jpg")).await;
        assert!(matches!(same_image, Err(PlacesError::ConstraintViolation(_))));
    }

    #[actix_rt::test]
    async fn test_get_all_and_find_by_ids() {
        let pool = init_memory_pool().await.unwrap();
        let kuta = PlaceRepository::create_place(&pool, &beach("Kuta", "kuta.jpg"))
            .await
            .unwrap();
        let sanur = PlaceRepository::create_place(&pool, &beach("Sanur", "sanur.jpg"))
            .await
            .unwrap();

        let all = PlaceRepository::get_all(&pool).await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Kuta", "Sanur"]);

        let by_id = PlaceRepository::find_by_ids(&pool, &[sanur.id, 99]).await.unwrap();
        assert_eq!(by_id.len(), 1);
        assert!(by_id.contains_key(&sanur.id));
        assert!(!by_id.contains_key(&kuta.id));

        let mut many: Vec<i64> = (1..=33_000).collect();
        many.push(kuta.id);
        let by_id = PlaceRepository::find_by_ids(&pool, &many).await.unwrap();
        assert_eq!(by_id.len(), 2);
    }
}
