// src/models/image.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Gallery image attached to a place
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: i64,
    pub place_id: Option<i64>,
    pub image_path: Option<String>,
    pub content_description: Option<String>,
}

/// Request to attach a new image to a place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateImageRequest {
    pub place_id: i64,
    pub image_path: String,
    pub content_description: Option<String>,
}
