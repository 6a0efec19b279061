// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered app user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

/// Request to create a user (seeding only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: Option<String>,
}
