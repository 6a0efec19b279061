// src/services/seed_service.rs
// DOCUMENTATION: Fixture loading by direct insertion
// PURPOSE: Insert users, places (with images) and wishlists; rows that
// already exist are skipped so a fixture can be loaded repeatedly

use crate::db::{ImageRepository, PlaceRepository, UserRepository, WishlistRepository};
use crate::errors::PlacesError;
use crate::models::{
    CreateImageRequest, CreatePlaceRequest, CreateUserRequest, CreateWishlistRequest,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Fixture file contents
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<CreateUserRequest>,
    #[serde(default)]
    pub places: Vec<CreatePlaceRequest>,
    #[serde(default)]
    pub wishlists: Vec<CreateWishlistRequest>,
}

/// Rows inserted per table, plus rows skipped as already present
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SeedStats {
    pub users: u32,
    pub places: u32,
    pub images: u32,
    pub wishlists: u32,
    pub skipped: u32,
}

pub struct SeedService;

impl SeedService {
    pub async fn load(pool: &SqlitePool, data: &SeedData) -> Result<SeedStats, PlacesError> {
        let mut stats = SeedStats::default();

        for user in &data.users {
            let result = UserRepository::create_user(pool, user).await;
            tally(result, &mut stats.users, &mut stats.skipped)?;
        }

        for place in &data.places {
            let result = PlaceRepository::create_place(pool, place).await;
            let Some(created) = tally(result, &mut stats.places, &mut stats.skipped)? else {
                continue;
            };

            for image in &place.images {
                let req = CreateImageRequest {
                    place_id: created.id,
                    image_path: image.image_path.clone(),
                    content_description: image.content_description.clone(),
                };
                let result = ImageRepository::create_image(pool, &req).await;
                tally(result, &mut stats.images, &mut stats.skipped)?;
            }
        }

        for wishlist in &data.wishlists {
            let result = WishlistRepository::create_wishlist(pool, wishlist).await;
            tally(result, &mut stats.wishlists, &mut stats.skipped)?;
        }

        log::info!(
            "Seeded {} users, {} places, {} images, {} wishlist rows ({} skipped)",
            stats.users,
            stats.places,
            stats.images,
            stats.wishlists,
            stats.skipped
        );

        Ok(stats)
    }
}

fn tally<T>(
    result: Result<T, PlacesError>,
    created: &mut u32,
    skipped: &mut u32,
) -> Result<Option<T>, PlacesError> {
    match result {
        Ok(value) => {
            *created += 1;
            Ok(Some(value))
        }
        Err(PlacesError::ConstraintViolation(msg)) => {
            log::warn!("Skipping existing row: {}", msg);
            *skipped += 1;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
