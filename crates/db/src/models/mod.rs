//! Entity structs matching the rows the repositories return.
//!
//! Rows are parsed into these types at the persistence boundary; nothing
//! above `todos_db` sees raw column maps.

pub mod todo;
pub mod todo_list;
