//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod todo_list_repo;
pub mod todo_repo;

pub use todo_list_repo::TodoListRepo;
pub use todo_repo::TodoRepo;
