//! Request extractors shared by handlers.

pub mod path_ids;
pub mod xhr;
