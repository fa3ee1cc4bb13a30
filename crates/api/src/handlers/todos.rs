//! Handlers for todos nested under `/lists/{list_id}/todos`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use todos_core::completion::sort_todos;
use todos_core::error::CoreError;
use todos_core::types::DbId;
use todos_core::validation::validate_todo_text;
use todos_db::repositories::TodoRepo;

use super::lists::{load_list, strip};
use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::middleware::path_ids::{ListId, TodoIds};
use crate::middleware::xhr::Xhr;
use crate::state::AppState;
use crate::views::{self, Page};

/// Form body for adding a todo.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub todo: String,
}

/// Form body for toggling a todo. Only the literal `"true"` marks it complete.
#[derive(Debug, Deserialize)]
pub struct TodoStatusForm {
    #[serde(default)]
    pub completed: String,
}

impl TodoStatusForm {
    pub fn is_completed(&self) -> bool {
        self.completed == "true"
    }
}

fn list_path(list_id: DbId) -> String {
    format!("/lists/{list_id}")
}

fn todo_not_found(todo_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Todo",
        id: todo_id,
    })
}

/// POST /lists/{list_id}/todos
///
/// Re-renders the list page with the submitted text on validation failure.
pub async fn create(
    State(state): State<AppState>,
    ListId(list_id): ListId,
    Form(input): Form<TodoForm>,
) -> AppResult<Response> {
    let list = load_list(&state.pool, list_id).await?;
    let text = strip(&input.todo);

    if let Err(err) = validate_todo_text(text) {
        tracing::debug!(list_id, error = %err, "Rejected todo text");
        let todos = sort_todos(TodoRepo::list_for_list(&state.pool, list_id).await?);
        return Ok(Page::new(views::list::show(&list, &todos, text))
            .with_validation_error(&err)
            .into_response());
    }

    let todo = TodoRepo::create(&state.pool, list_id, text).await?;
    tracing::info!(list_id, todo_id = todo.id, "Todo added");
    Ok((Flash::TodoAdded, Redirect::to(&list_path(list_id))).into_response())
}

/// POST /lists/{list_id}/todos/{todo_id}
pub async fn set_status(
    State(state): State<AppState>,
    TodoIds { list_id, todo_id }: TodoIds,
    Form(input): Form<TodoStatusForm>,
) -> AppResult<Response> {
    load_list(&state.pool, list_id).await?;
    let completed = input.is_completed();

    if !TodoRepo::set_status(&state.pool, list_id, todo_id, completed).await? {
        return Err(todo_not_found(todo_id));
    }
    tracing::info!(list_id, todo_id, completed, "Todo status updated");
    Ok((Flash::TodoUpdated, Redirect::to(&list_path(list_id))).into_response())
}

/// POST /lists/{list_id}/todos/{todo_id}/delete
///
/// Asynchronous callers get `204 No Content`.
pub async fn delete(
    State(state): State<AppState>,
    TodoIds { list_id, todo_id }: TodoIds,
    Xhr(is_xhr): Xhr,
) -> AppResult<Response> {
    let deleted = TodoRepo::delete(&state.pool, list_id, todo_id).await?;
    if deleted {
        tracing::info!(list_id, todo_id, "Todo deleted");
    }

    match (deleted, is_xhr) {
        (true, true) => Ok(StatusCode::NO_CONTENT.into_response()),
        (true, false) => Ok((Flash::TodoDeleted, Redirect::to(&list_path(list_id))).into_response()),
        (false, true) => Ok(StatusCode::NOT_FOUND.into_response()),
        (false, false) => Err(todo_not_found(todo_id)),
    }
}

/// POST /lists/{list_id}/complete_all
pub async fn complete_all(
    State(state): State<AppState>,
    ListId(list_id): ListId,
) -> AppResult<Response> {
    load_list(&state.pool, list_id).await?;
    let updated = TodoRepo::complete_all(&state.pool, list_id).await?;
    tracing::info!(list_id, updated, "All todos completed");
    Ok((Flash::AllTodosCompleted, Redirect::to(&list_path(list_id))).into_response())
}
