//! Server-rendered HTML pages.
//!
//! Views are plain functions from typed records to HTML strings. Every value
//! that originates from the user or the database goes through [`escape`].
//! [`Page`] wraps rendered content in the shared layout together with any
//! notices and is what page handlers return.

pub mod list;
pub mod lists;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use todos_core::error::ValidationError;

use crate::flash::{ClearFlash, Flash, FlashLevel};

const STYLESHEET: &str = r#"
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; color: #222; }
header h1 a { color: inherit; text-decoration: none; }
.flash { padding: 0.5rem 1rem; margin-bottom: 1rem; border-radius: 4px; }
.flash.success { background: #e3f6e3; }
.flash.error { background: #fbe3e3; }
ul { list-style: none; padding: 0; }
li { display: flex; align-items: center; gap: 0.75rem; }
li.complete h2, li.complete h3 { text-decoration: line-through; color: #888; }
form { display: inline; }
"#;

/// Submits `form.delete` forms asynchronously. A `204` removes the todo row,
/// a `200` carries the path to navigate to.
const DELETE_SCRIPT: &str = r#"
document.addEventListener("submit", function (event) {
  var form = event.target;
  if (!form.classList.contains("delete")) return;
  event.preventDefault();
  if (!window.confirm("Are you sure? This cannot be undone!")) return;
  var request = new XMLHttpRequest();
  request.open("POST", form.action);
  request.setRequestHeader("X-Requested-With", "XMLHttpRequest");
  request.onload = function () {
    if (request.status === 204) {
      var item = form.closest("li");
      if (item) item.remove();
    } else if (request.status === 200) {
      window.location.href = request.responseText;
    }
  };
  request.send();
});
"#;

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// A notice rendered above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: FlashLevel,
    pub message: String,
}

impl From<Flash> for Notice {
    fn from(flash: Flash) -> Self {
        Self {
            level: flash.level(),
            message: flash.message().to_string(),
        }
    }
}

impl From<&ValidationError> for Notice {
    fn from(err: &ValidationError) -> Self {
        Self {
            level: FlashLevel::Error,
            message: err.to_string(),
        }
    }
}

/// A full HTML page ready to be sent.
#[derive(Debug)]
pub struct Page {
    content: String,
    notices: Vec<Notice>,
    status: StatusCode,
    consumed_flash: bool,
}

impl Page {
    pub fn new(content: String) -> Self {
        Self {
            content,
            notices: Vec::new(),
            status: StatusCode::OK,
            consumed_flash: false,
        }
    }

    /// Show the flash left by the previous response and expire its cookie.
    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        if let Some(flash) = flash {
            self.notices.push(flash.into());
            self.consumed_flash = true;
        }
        self
    }

    /// Re-render a form with an inline validation error.
    pub fn with_validation_error(mut self, err: &ValidationError) -> Self {
        self.notices.push(err.into());
        self.status = StatusCode::UNPROCESSABLE_ENTITY;
        self
    }

    pub fn render(&self) -> String {
        layout(&self.notices, &self.content)
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let html = Html(self.render());
        if self.consumed_flash {
            (self.status, ClearFlash, html).into_response()
        } else {
            (self.status, html).into_response()
        }
    }
}

/// Standalone page for errors that have no form to return to.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let content = format!(
        "<h2>{}</h2>\n<p>{}</p>\n<p><a href=\"/lists\">Back to all lists</a></p>",
        status.as_u16(),
        escape(message)
    );
    Html(layout(&[], &content))
}

fn layout(notices: &[Notice], content: &str) -> String {
    let notices: String = notices
        .iter()
        .map(|notice| {
            format!(
                "<div class=\"flash {}\"><p>{}</p></div>\n",
                notice.level.css_class(),
                escape(&notice.message)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Todos</title>\n\
         <style>{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         <header><h1><a href=\"/lists\">Todo Tracker</a></h1></header>\n\
         <main>\n\
         {notices}{content}\n\
         </main>\n\
         <script>{DELETE_SCRIPT}</script>\n\
         </body>\n\
         </html>\n"
    )
}
