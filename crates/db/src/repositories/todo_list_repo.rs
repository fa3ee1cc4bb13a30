//! Repository for the `lists` table.

use sqlx::PgPool;
use todos_core::types::DbId;

use crate::models::todo_list::TodoList;

/// List columns plus the two aggregate counts over the list's todos.
///
/// Must be followed by an optional `WHERE` and then [`GROUP_BY`].
const SELECT_WITH_COUNTS: &str = "SELECT lists.id, lists.name, \
     COUNT(todos.id) AS todos_count, \
     COUNT(todos.id) FILTER (WHERE NOT todos.completed) AS todos_remaining \
     FROM lists LEFT JOIN todos ON todos.list_id = lists.id";

const GROUP_BY: &str = "GROUP BY lists.id, lists.name";

/// Provides CRUD operations for lists.
pub struct TodoListRepo;

impl TodoListRepo {
    /// Insert a new, empty list, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<TodoList, sqlx::Error> {
        tracing::debug!(name, "INSERT INTO lists");
        sqlx::query_as::<_, TodoList>(
            "INSERT INTO lists (name) VALUES ($1) \
             RETURNING id, name, 0::BIGINT AS todos_count, 0::BIGINT AS todos_remaining",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Find a list by ID together with its todo counts.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TodoList>, sqlx::Error> {
        let query = format!("{SELECT_WITH_COUNTS} WHERE lists.id = $1 {GROUP_BY}");
        tracing::debug!(list_id = id, "SELECT list with counts");
        sqlx::query_as::<_, TodoList>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every list with its todo counts, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<TodoList>, sqlx::Error> {
        let query = format!("{SELECT_WITH_COUNTS} {GROUP_BY} ORDER BY lists.name");
        tracing::debug!("SELECT all lists with counts");
        sqlx::query_as::<_, TodoList>(&query).fetch_all(pool).await
    }

    /// Names of all lists, used for the uniqueness check.
    pub async fn names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        tracing::debug!("SELECT list names");
        sqlx::query_scalar::<_, String>("SELECT name FROM lists ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Rename a list. Returns `true` if a row was updated.
    pub async fn rename(pool: &PgPool, id: DbId, new_name: &str) -> Result<bool, sqlx::Error> {
        tracing::debug!(list_id = id, new_name, "UPDATE lists SET name");
        let result = sqlx::query("UPDATE lists SET name = $1 WHERE id = $2")
            .bind(new_name)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a list and all of its todos. Returns `true` if the list existed.
    ///
    /// Todos are removed first so a list is never gone while its todos
    /// survive. Both statements share one transaction.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        tracing::debug!(list_id = id, "DELETE FROM todos, lists");
        let mut tx = pool.begin().await?;

        let todos = sqlx::query("DELETE FROM todos WHERE list_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let list = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            list_id = id,
            todos_deleted = todos.rows_affected(),
            "Deleted list and its todos"
        );
        Ok(list.rows_affected() > 0)
    }
}
