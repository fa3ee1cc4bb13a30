//! Todo entity model.

use serde::Serialize;
use sqlx::FromRow;
use todos_core::completion::Completion;
use todos_core::types::DbId;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub list_id: DbId,
    pub name: String,
    pub completed: bool,
}

impl Completion for Todo {
    fn is_complete(&self) -> bool {
        self.completed
    }
}
