//! Detection of asynchronous (script-initiated) requests.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header set by the page script on asynchronous requests.
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";

/// Value of [`REQUESTED_WITH_HEADER`] identifying an asynchronous request.
pub const XHR_VALUE: &str = "XMLHttpRequest";

/// Whether the request came from the page script rather than a form submit.
///
/// Asynchronous callers get terse responses (status codes, bare paths)
/// instead of redirects with flash messages.
///
/// ```ignore
/// async fn delete(Xhr(is_xhr): Xhr) -> Response {
///     if is_xhr { StatusCode::NO_CONTENT.into_response() } else { /* redirect */ }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xhr(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for Xhr {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_xhr = parts
            .headers
            .get(REQUESTED_WITH_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == XHR_VALUE);
        Ok(Xhr(is_xhr))
    }
}
