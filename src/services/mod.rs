// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod feedback_service;
pub mod place_service;
pub mod seed_service;
pub mod wishlist_service;

pub use feedback_service::*;
pub use place_service::*;
pub use seed_service::*;
pub use wishlist_service::*;
