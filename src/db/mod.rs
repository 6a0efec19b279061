// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod feedback_repository;
pub mod image_repository;
pub mod place_repository;
pub mod schema;
pub mod user_repository;
pub mod wishlist_repository;

pub use feedback_repository::*;
pub use image_repository::*;
pub use place_repository::*;
pub use schema::*;
pub use user_repository::*;
pub use wishlist_repository::*;

/// Ids bound per `IN (..)` lookup, well below SQLite's host-parameter limit
pub(crate) const ID_BATCH_SIZE: usize = 500;

/// Sorted, de-duplicated copy of `ids`
pub(crate) fn unique_ids(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}
