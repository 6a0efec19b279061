// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and is rendered
/// in the same `{status, message, data}` envelope used by successful responses
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl PlacesError {
    /// Map a sqlx failure, logging it with the operation that produced it
    pub fn from_db(context: &str, err: sqlx::Error) -> Self {
        let unique = err
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);

        if unique {
            log::warn!("{} rejected: {}", context, err);
            PlacesError::ConstraintViolation(format!("{}: {}", context, err))
        } else {
            log::error!("{} failed: {}", context, err);
            PlacesError::DatabaseError(format!("{} failed: {}", context, err))
        }
    }
}

impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = json!({
            "status": status.as_u16(),
            "message": self.to_string(),
            "data": null
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::NotFound(_) => StatusCode::NOT_FOUND,
            PlacesError::ValidationError(_) => StatusCode::BAD_REQUEST,
            PlacesError::ConstraintViolation(_) => StatusCode::CONFLICT,
            PlacesError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
