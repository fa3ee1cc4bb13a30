//! Domain logic for the todos service.
//!
//! Everything here is pure: validation of user-submitted names and the
//! completion/ordering rules used when lists and todos are displayed.
//! Persistence lives in `todos_db`, HTTP in `todos_api`.

pub mod completion;
pub mod error;
pub mod types;
pub mod validation;
