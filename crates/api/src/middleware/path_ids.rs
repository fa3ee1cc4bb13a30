//! Path id extractors.
//!
//! An id segment that is not a valid integer can never name a stored row, so
//! it is reported as a missing list or todo rather than a malformed request.
//! The browser is redirected to the index with the usual not-found flash.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use todos_core::error::CoreError;
use todos_core::types::DbId;

use crate::error::AppError;

/// The `{list_id}` segment of a list route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListId(pub DbId);

/// The `{list_id}` and `{todo_id}` segments of a todo route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoIds {
    pub list_id: DbId,
    pub todo_id: DbId,
}

async fn path_params<S: Send + Sync>(parts: &mut Parts, state: &S) -> HashMap<String, String> {
    Path::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map(|Path(params)| params)
        .unwrap_or_default()
}

fn parse_id(
    params: &HashMap<String, String>,
    key: &str,
    entity: &'static str,
) -> Result<DbId, AppError> {
    let raw = params.get(key).map(String::as_str).unwrap_or_default();
    raw.parse::<DbId>().map_err(|_| {
        tracing::debug!(entity, raw, "Unparseable id in path");
        AppError::Core(CoreError::NotFound { entity, id: 0 })
    })
}

impl<S: Send + Sync> FromRequestParts<S> for ListId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await;
        Ok(ListId(parse_id(&params, "list_id", "List")?))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for TodoIds {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await;
        Ok(TodoIds {
            list_id: parse_id(&params, "list_id", "List")?,
            todo_id: parse_id(&params, "todo_id", "Todo")?,
        })
    }
}
