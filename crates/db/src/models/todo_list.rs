//! List entity model with its derived todo counts.

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use todos_core::completion::{self, Completion};
use todos_core::types::DbId;

/// A list row joined with aggregate counts over its todos.
///
/// `todos_count` and `todos_remaining` are computed by the query, not
/// stored. Decoding rejects rows where `todos_remaining` is negative or
/// exceeds `todos_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoList {
    pub id: DbId,
    pub name: String,
    pub todos_count: i64,
    pub todos_remaining: i64,
}

impl TodoList {
    /// `"<remaining> / <total>"`, as shown next to the list name.
    pub fn remaining_to_total_label(&self) -> String {
        completion::remaining_to_total_label(self.todos_count, self.todos_remaining)
    }
}

impl Completion for TodoList {
    fn is_complete(&self) -> bool {
        completion::is_list_complete(self.todos_count, self.todos_remaining)
    }
}

impl<'r> FromRow<'r, PgRow> for TodoList {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let todos_count: i64 = row.try_get("todos_count")?;
        let todos_remaining: i64 = row.try_get("todos_remaining")?;

        if !(0..=todos_count).contains(&todos_remaining) {
            return Err(sqlx::Error::ColumnDecode {
                index: "todos_remaining".to_string(),
                source: format!(
                    "todos_remaining ({todos_remaining}) must be between 0 and todos_count ({todos_count})"
                )
                .into(),
            });
        }

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            todos_count,
            todos_remaining,
        })
    }
}
