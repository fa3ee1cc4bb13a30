//! Repository for the `todos` table.
//!
//! Every statement is scoped by `list_id` so a todo can only be touched
//! through the list that owns it.

use sqlx::PgPool;
use todos_core::types::DbId;

use crate::models::todo::Todo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, list_id, name, completed";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new, incomplete todo into a list, returning the created row.
    pub async fn create(pool: &PgPool, list_id: DbId, text: &str) -> Result<Todo, sqlx::Error> {
        tracing::debug!(list_id, text, "INSERT INTO todos");
        let query = format!(
            "INSERT INTO todos (list_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(list_id)
            .bind(text)
            .fetch_one(pool)
            .await
    }

    /// All todos in a list, in insertion order.
    pub async fn list_for_list(pool: &PgPool, list_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE list_id = $1 ORDER BY id");
        tracing::debug!(list_id, "SELECT todos for list");
        sqlx::query_as::<_, Todo>(&query)
            .bind(list_id)
            .fetch_all(pool)
            .await
    }

    /// Set a todo's completion status. Returns `true` if a row was updated.
    pub async fn set_status(
        pool: &PgPool,
        list_id: DbId,
        todo_id: DbId,
        completed: bool,
    ) -> Result<bool, sqlx::Error> {
        tracing::debug!(list_id, todo_id, completed, "UPDATE todos SET completed");
        let result = sqlx::query("UPDATE todos SET completed = $1 WHERE list_id = $2 AND id = $3")
            .bind(completed)
            .bind(list_id)
            .bind(todo_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark every todo in a list as completed. Returns the number of rows updated.
    pub async fn complete_all(pool: &PgPool, list_id: DbId) -> Result<u64, sqlx::Error> {
        tracing::debug!(list_id, "UPDATE todos SET completed = TRUE");
        let result = sqlx::query("UPDATE todos SET completed = TRUE WHERE list_id = $1")
            .bind(list_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a todo from a list. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, list_id: DbId, todo_id: DbId) -> Result<bool, sqlx::Error> {
        tracing::debug!(list_id, todo_id, "DELETE FROM todos");
        let result = sqlx::query("DELETE FROM todos WHERE list_id = $1 AND id = $2")
            .bind(list_id)
            .bind(todo_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
