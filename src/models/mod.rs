// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod feedback;
pub mod image;
pub mod place;
pub mod user;
pub mod wishlist;

pub use feedback::*;
pub use image::*;
pub use place::*;
pub use user::*;
pub use wishlist::*;
