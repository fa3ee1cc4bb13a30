pub mod health;
pub mod lists;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree (health check plus the HTML pages).
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(lists::router())
}
