// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Maps the places table and the payload used to insert into it

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents a complete place record from the database
/// DOCUMENTATION: This struct maps directly to the places table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Place {
    /// Primary key
    pub id: i64,

    /// Place name, unique across the table
    pub name: String,

    /// Free-form location text (city, region)
    pub location: Option<String>,

    /// Latitude in decimal degrees
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    pub long: Option<f64>,

    /// Optional detailed description
    pub description: Option<String>,

    /// Cover image path, unique across the table
    pub image_path: Option<String>,
}

/// Request DTO for inserting a new place
/// DOCUMENTATION: Used by the seeding tool; images are inserted after the
/// place row exists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaceRequest {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    pub location: Option<String>,

    pub lat: Option<f64>,

    pub long: Option<f64>,

    pub description: Option<String>,

    pub image_path: Option<String>,

    /// Gallery images for the place
    #[serde(default)]
    pub images: Vec<SeedImage>,
}

/// Gallery image nested inside a seeded place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedImage {
    pub image_path: String,
    pub content_description: Option<String>,
}
