// src/db/schema.rs
// DOCUMENTATION: Table definitions
// PURPOSE: Idempotent schema bootstrap run when the pool is created

use sqlx::SqlitePool;

/// CREATE statements in dependency order
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id INTEGER PRIMARY KEY,
        username VARCHAR(150)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS places (
        id INTEGER PRIMARY KEY,
        name VARCHAR(100) NOT NULL UNIQUE,
        location VARCHAR(255),
        lat REAL,
        long REAL,
        description VARCHAR(255),
        image_path VARCHAR(255) UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS image (
        id INTEGER PRIMARY KEY,
        place_id INTEGER REFERENCES places (id),
        image_path VARCHAR(255) UNIQUE,
        content_description VARCHAR(255)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS feedback (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES "user" (id),
        place_id INTEGER NOT NULL REFERENCES places (id),
        rating REAL NOT NULL,
        "desc" VARCHAR(255),
        date DATE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS wishlist (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES "user" (id),
        place_id INTEGER NOT NULL REFERENCES places (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_feedback_place ON feedback (place_id)",
    "CREATE INDEX IF NOT EXISTS idx_feedback_user ON feedback (user_id)",
    // An index rather than a table constraint so older database files pick it up
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_wishlist_user_place ON wishlist (user_id, place_id)",
    "CREATE INDEX IF NOT EXISTS idx_image_place ON image (place_id)",
];

/// Create all tables and indexes that do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    log::debug!("Schema ready ({} statements)", SCHEMA.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::init_memory_pool;

    #[actix_rt::test]
    async fn test_schema_is_idempotent() {
        let pool = init_memory_pool().await.unwrap();
        init_schema(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(names, vec!["feedback", "image", "places", "user", "wishlist"]);
    }
}
