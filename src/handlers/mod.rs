// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and wire every route

pub mod feedback;
pub mod health;
pub mod places;
pub mod wishlist;

pub use feedback::config as feedback_config;
pub use health::config as health_config;
pub use places::config as places_config;
pub use wishlist::config as wishlist_config;

use crate::errors::PlacesError;
use actix_web::web;

/// Register all routes plus extractor error handling
/// DOCUMENTATION: Bad query strings become ValidationError (400) and
/// non-numeric path ids NotFound (404), both rendered in the envelope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, req| {
        log::debug!("Rejected query for {}: {}", req.path(), err);
        PlacesError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, req| {
        log::debug!("Rejected path {}: {}", req.path(), err);
        PlacesError::NotFound(req.path().to_string()).into()
    }))
    .configure(health_config)
    .configure(places_config)
    .configure(wishlist_config)
    .configure(feedback_config);
}
