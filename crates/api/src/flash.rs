//! One-shot flash messages carried between a redirect and the next page.
//!
//! A handler that redirects after a mutation attaches a [`Flash`] to the
//! response, which stores it in a short-lived `flash` cookie. The next page
//! render reads it through [`PendingFlash`] and answers with [`ClearFlash`],
//! so each message is shown exactly once.
//!
//! The cookie holds a slug naming one of the fixed messages below, never
//! free text, so it needs no encoding and cannot be used to inject markup.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponseParts, ResponseParts};

use crate::error::AppError;

/// Name of the cookie carrying the pending flash slug.
pub const FLASH_COOKIE: &str = "flash";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

/// Whether a notice reports success or a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    /// CSS class used for the notice container.
    pub fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A message to show on the next rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    ListCreated,
    ListRenamed,
    ListDeleted,
    TodoAdded,
    TodoUpdated,
    TodoDeleted,
    AllTodosCompleted,
    ListNotFound,
    TodoNotFound,
}

impl Flash {
    const ALL: [Flash; 9] = [
        Flash::ListCreated,
        Flash::ListRenamed,
        Flash::ListDeleted,
        Flash::TodoAdded,
        Flash::TodoUpdated,
        Flash::TodoDeleted,
        Flash::AllTodosCompleted,
        Flash::ListNotFound,
        Flash::TodoNotFound,
    ];

    pub fn level(self) -> FlashLevel {
        match self {
            Flash::ListNotFound | Flash::TodoNotFound => FlashLevel::Error,
            _ => FlashLevel::Success,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::ListCreated => "The list has been created.",
            Flash::ListRenamed => "The list has been renamed.",
            Flash::ListDeleted => "The list has been deleted.",
            Flash::TodoAdded => "The todo has been added.",
            Flash::TodoUpdated => "The todo has been updated.",
            Flash::TodoDeleted => "The todo has been deleted.",
            Flash::AllTodosCompleted => "All todos have been completed.",
            Flash::ListNotFound => "The specified list was not found.",
            Flash::TodoNotFound => "The specified todo was not found.",
        }
    }

    /// Cookie-safe identifier for this message.
    pub fn slug(self) -> &'static str {
        match self {
            Flash::ListCreated => "list-created",
            Flash::ListRenamed => "list-renamed",
            Flash::ListDeleted => "list-deleted",
            Flash::TodoAdded => "todo-added",
            Flash::TodoUpdated => "todo-updated",
            Flash::TodoDeleted => "todo-deleted",
            Flash::AllTodosCompleted => "all-todos-completed",
            Flash::ListNotFound => "list-not-found",
            Flash::TodoNotFound => "todo-not-found",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flash| flash.slug() == slug)
    }
}

impl IntoResponseParts for Flash {
    type Error = AppError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let cookie = format!("{FLASH_COOKIE}={}; {COOKIE_ATTRIBUTES}", self.slug());
        let value = HeaderValue::try_from(cookie)
            .map_err(|e| AppError::InternalError(format!("Invalid flash cookie: {e}")))?;
        res.headers_mut().append(SET_COOKIE, value);
        Ok(res)
    }
}

/// Expires the flash cookie once its message has been rendered.
#[derive(Debug, Clone, Copy)]
pub struct ClearFlash;

impl IntoResponseParts for ClearFlash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        res.headers_mut().append(
            SET_COOKIE,
            HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
        );
        Ok(res)
    }
}

/// The flash left by the previous response, if any.
///
/// Unknown slugs are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingFlash(pub Option<Flash>);

impl<S: Send + Sync> FromRequestParts<S> for PendingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, slug)| Flash::from_slug(slug));

        Ok(PendingFlash(flash))
    }
}
