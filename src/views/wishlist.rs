// src/views/wishlist.rs

use super::{Links, PlaceCard};
use crate::models::{Place, Wishlist};
use serde::Serialize;

/// GET /wishlist entry
/// DOCUMENTATION: `links.next` substitutes the wishlist row's own id into
/// the place detail route
#[derive(Debug, Clone, Serialize)]
pub struct WishlistItem {
    pub id: i64,
    pub place_detail: Option<PlaceCard>,
    pub links: Links,
}

impl WishlistItem {
    pub fn new(wishlist: &Wishlist, place: Option<&Place>) -> Self {
        WishlistItem {
            id: wishlist.id,
            place_detail: place.map(PlaceCard::from),
            links: Links::to_place(wishlist.id),
        }
    }
}
