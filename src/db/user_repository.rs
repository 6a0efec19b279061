// src/db/user_repository.rs
// DOCUMENTATION: User database operations
// PURPOSE: Lookups used to nest user summaries into feedback views

use crate::db::{unique_ids, ID_BATCH_SIZE};
use crate::errors::PlacesError;
use crate::models::{CreateUserRequest, User};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

pub struct UserRepository;

impl UserRepository {
    /// Insert a user, keeping the caller's id when one is given
    pub async fn create_user(
        pool: &SqlitePool,
        req: &CreateUserRequest,
    ) -> Result<User, PlacesError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (id, username)
            VALUES (?, ?)
            RETURNING id, username
            "#,
        )
        .bind(req.id)
        .bind(&req.username)
        .fetch_one(pool)
        .await
        .map_err(|e| PlacesError::from_db("Create user", e))
    }

    /// Get a user by primary key; absent users are `None`, not an error
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, PlacesError> {
        sqlx::query_as::<_, User>(r#"SELECT id, username FROM "user" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| PlacesError::from_db("Fetch user", e))
    }

    /// Batch lookup keyed by id; unknown ids are simply missing from the map
    pub async fn find_by_ids(
        pool: &SqlitePool,
        ids: &[i64],
    ) -> Result<HashMap<i64, User>, PlacesError> {
        let mut found = HashMap::new();

        for chunk in unique_ids(ids).chunks(ID_BATCH_SIZE) {
            let mut builder =
                QueryBuilder::<Sqlite>::new(r#"SELECT id, username FROM "user" WHERE id IN ("#);
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let users = builder
                .build_query_as::<User>()
                .fetch_all(pool)
                .await
                .map_err(|e| PlacesError::from_db("Fetch users", e))?;

            found.extend(users.into_iter().map(|u| (u.id, u)));
        }

        Ok(found)
    }
}
