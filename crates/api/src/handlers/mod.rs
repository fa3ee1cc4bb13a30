//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `todos_db`, apply the rules in
//! `todos_core`, and either render a [`Page`](crate::views::Page) or
//! redirect with a [`Flash`](crate::flash::Flash).

pub mod lists;
pub mod todos;
