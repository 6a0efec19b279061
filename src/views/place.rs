// src/views/place.rs
// DOCUMENTATION: Place projections
// PURPOSE: Listing card, detail page and the summaries nested elsewhere

use super::{Links, PlaceReview};
use crate::models::{Image, Place};
use serde::Serialize;

/// GET /home entry
#[derive(Debug, Clone, Serialize)]
pub struct PlaceListItem {
    pub id: i64,
    pub name: String,
    pub image_path: Option<String>,
    pub links: Links,
}

impl From<&Place> for PlaceListItem {
    fn from(place: &Place) -> Self {
        PlaceListItem {
            id: place.id,
            name: place.name.clone(),
            image_path: place.image_path.clone(),
            links: Links::to_place(place.id),
        }
    }
}

/// `{id, name}` nested inside feedback
#[derive(Debug, Clone, Serialize)]
pub struct PlaceSummary {
    pub id: i64,
    pub name: String,
}

impl From<&Place> for PlaceSummary {
    fn from(place: &Place) -> Self {
        PlaceSummary {
            id: place.id,
            name: place.name.clone(),
        }
    }
}

/// `{id, name, image_path}` nested inside wishlist entries
#[derive(Debug, Clone, Serialize)]
pub struct PlaceCard {
    pub id: i64,
    pub name: String,
    pub image_path: Option<String>,
}

impl From<&Place> for PlaceCard {
    fn from(place: &Place) -> Self {
        PlaceCard {
            id: place.id,
            name: place.name.clone(),
            image_path: place.image_path.clone(),
        }
    }
}

/// Gallery entry of the detail page
#[derive(Debug, Clone, Serialize)]
pub struct ImageSummary {
    pub image_path: Option<String>,
    pub content_description: Option<String>,
}

impl From<&Image> for ImageSummary {
    fn from(image: &Image) -> Self {
        ImageSummary {
            image_path: image.image_path.clone(),
            content_description: image.content_description.clone(),
        }
    }
}

/// GET /place/{id} payload
/// DOCUMENTATION: Every stored column except image_path, no links,
/// plus the gallery (`image_url`) and the reviews
#[derive(Debug, Clone, Serialize)]
pub struct PlaceDetail {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub description: Option<String>,
    pub image_url: Vec<ImageSummary>,
    pub reviews: Vec<PlaceReview>,
}

impl PlaceDetail {
    pub fn new(place: &Place, images: &[Image], reviews: Vec<PlaceReview>) -> Self {
        PlaceDetail {
            id: place.id,
            name: place.name.clone(),
            location: place.location.clone(),
            lat: place.lat,
            long: place.long,
            description: place.description.clone(),
            image_url: images.iter().map(ImageSummary::from).collect(),
            reviews,
        }
    }
}
