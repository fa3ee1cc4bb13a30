//! Handlers for the `/lists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use todos_core::completion::{sort_lists, sort_todos};
use todos_core::error::CoreError;
use todos_core::types::DbId;
use todos_core::validation::validate_list_name;
use todos_db::models::todo_list::TodoList;
use todos_db::repositories::{TodoListRepo, TodoRepo};
use todos_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::flash::{Flash, PendingFlash};
use crate::middleware::path_ids::ListId;
use crate::middleware::xhr::Xhr;
use crate::state::AppState;
use crate::views::{self, Page};

/// Form body for creating or renaming a list.
#[derive(Debug, Deserialize)]
pub struct ListNameForm {
    #[serde(default)]
    pub list_name: String,
}

/// Trim ASCII whitespace, vertical tab and NUL from both ends of a submitted name.
///
/// Other Unicode whitespace is kept and counts towards the length.
pub(crate) fn strip(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0' || c == '\x0b')
}

/// Load a list or fail with [`CoreError::NotFound`].
pub(crate) async fn load_list(pool: &DbPool, id: DbId) -> AppResult<TodoList> {
    TodoListRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "List", id }))
}

/// GET /
pub async fn root() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists
pub async fn index(
    State(state): State<AppState>,
    PendingFlash(flash): PendingFlash,
) -> AppResult<Page> {
    let lists = sort_lists(TodoListRepo::list(&state.pool).await?);
    Ok(Page::new(views::lists::index(&lists)).with_flash(flash))
}

/// GET /lists/new
pub async fn new_form(PendingFlash(flash): PendingFlash) -> Page {
    Page::new(views::lists::new_list("")).with_flash(flash)
}

/// GET /lists/{list_id}
pub async fn show(
    State(state): State<AppState>,
    ListId(list_id): ListId,
    PendingFlash(flash): PendingFlash,
) -> AppResult<Page> {
    let list = load_list(&state.pool, list_id).await?;
    let todos = sort_todos(TodoRepo::list_for_list(&state.pool, list_id).await?);
    Ok(Page::new(views::list::show(&list, &todos, "")).with_flash(flash))
}

/// GET /lists/{list_id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    ListId(list_id): ListId,
    PendingFlash(flash): PendingFlash,
) -> AppResult<Page> {
    let list = load_list(&state.pool, list_id).await?;
    Ok(Page::new(views::lists::edit_list(&list, &list.name)).with_flash(flash))
}

/// POST /lists
///
/// Re-renders the form with the submitted name on validation failure.
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<ListNameForm>,
) -> AppResult<Response> {
    let name = strip(&input.list_name);
    let existing = TodoListRepo::names(&state.pool).await?;

    if let Err(err) = validate_list_name(name, existing.as_slice()) {
        tracing::debug!(error = %err, "Rejected new list name");
        return Ok(Page::new(views::lists::new_list(name))
            .with_validation_error(&err)
            .into_response());
    }

    let list = TodoListRepo::create(&state.pool, name).await?;
    tracing::info!(list_id = list.id, "List created");
    Ok((Flash::ListCreated, Redirect::to("/lists")).into_response())
}

/// POST /lists/{list_id}
///
/// Renaming to the list's current name is rejected as a duplicate, like any
/// other name already in use.
pub async fn rename(
    State(state): State<AppState>,
    ListId(list_id): ListId,
    Form(input): Form<ListNameForm>,
) -> AppResult<Response> {
    let list = load_list(&state.pool, list_id).await?;
    let name = strip(&input.list_name);
    let existing = TodoListRepo::names(&state.pool).await?;

    if let Err(err) = validate_list_name(name, existing.as_slice()) {
        tracing::debug!(list_id, error = %err, "Rejected list rename");
        return Ok(Page::new(views::lists::edit_list(&list, name))
            .with_validation_error(&err)
            .into_response());
    }

    if !TodoListRepo::rename(&state.pool, list_id, name).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }));
    }
    tracing::info!(list_id, "List renamed");
    Ok((Flash::ListRenamed, Redirect::to(&format!("/lists/{list_id}"))).into_response())
}

/// POST /lists/{list_id}/delete
///
/// Asynchronous callers get `200` with the path to navigate to.
pub async fn delete(
    State(state): State<AppState>,
    ListId(list_id): ListId,
    Xhr(is_xhr): Xhr,
) -> AppResult<Response> {
    let deleted = TodoListRepo::delete(&state.pool, list_id).await?;
    if deleted {
        tracing::info!(list_id, "List deleted");
    }

    match (deleted, is_xhr) {
        (true, true) => Ok((StatusCode::OK, "/lists").into_response()),
        (true, false) => Ok((Flash::ListDeleted, Redirect::to("/lists")).into_response()),
        (false, true) => Ok(StatusCode::NOT_FOUND.into_response()),
        (false, false) => Err(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        })),
    }
}
