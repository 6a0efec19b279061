// src/views/links.rs

use serde::Serialize;

/// Relative URL of the place detail endpoint
pub fn link_for(place_id: i64) -> String {
    format!("/place/{}", place_id)
}

/// Hyperlinks block attached to listing entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Links {
    pub next: String,
}

impl Links {
    pub fn to_place(place_id: i64) -> Self {
        Links {
            next: link_for(place_id),
        }
    }
}
