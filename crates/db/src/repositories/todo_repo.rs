//! Repository for the `todos` table.

use sqlx::PgPool;

use crate::models::todo::Todo;

/// Column list for `todos` queries.
const COLUMNS: &str = "id, description, status";

/// Provides data access for to-do records.
pub struct TodoRepo;

impl TodoRepo {
    /// List every record in first-insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY seq");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a record by its key.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the record, or replace description and status when the key
    /// already exists.
    ///
    /// Uses `ON CONFLICT (id) DO UPDATE`, so the original insertion position
    /// and `created_at` are kept.
    pub async fn upsert(pool: &PgPool, todo: &Todo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (id, description, status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET \
                 description = EXCLUDED.description, \
                 status = EXCLUDED.status, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&todo.id)
            .bind(&todo.description)
            .bind(todo.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Delete a record by key.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
