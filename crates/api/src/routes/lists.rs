//! Route definitions for lists and their todos.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{lists, todos};
use crate::state::AppState;

/// Routes for lists and the todos nested under them.
///
/// ```text
/// GET  /                                          -> redirect to /lists
/// GET  /lists                                     -> index
/// POST /lists                                     -> create
/// GET  /lists/new                                 -> new list form
/// GET  /lists/{list_id}                           -> show
/// POST /lists/{list_id}                           -> rename
/// GET  /lists/{list_id}/edit                      -> edit form
/// POST /lists/{list_id}/delete                    -> delete (XHR: 200 + path)
/// POST /lists/{list_id}/complete_all              -> complete all todos
/// POST /lists/{list_id}/todos                     -> add todo
/// POST /lists/{list_id}/todos/{todo_id}           -> set status
/// POST /lists/{list_id}/todos/{todo_id}/delete    -> delete todo (XHR: 204)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lists::root))
        .route("/lists", get(lists::index).post(lists::create))
        .route("/lists/new", get(lists::new_form))
        .route("/lists/{list_id}", get(lists::show).post(lists::rename))
        .route("/lists/{list_id}/edit", get(lists::edit_form))
        .route("/lists/{list_id}/delete", post(lists::delete))
        .route("/lists/{list_id}/complete_all", post(todos::complete_all))
        .route("/lists/{list_id}/todos", post(todos::create))
        .route("/lists/{list_id}/todos/{todo_id}", post(todos::set_status))
        .route("/lists/{list_id}/todos/{todo_id}/delete", post(todos::delete))
}
