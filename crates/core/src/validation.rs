//! Validation rules for user-submitted list names and todo text.
//!
//! Both rules bound the length to [`MIN_NAME_LEN`]..=[`MAX_NAME_LEN`]
//! characters. List names must additionally be unique; the uniqueness check
//! runs first, so a duplicate is reported even when its length is also out
//! of range.

use crate::error::{NameField, ValidationError};

/// Shortest accepted list name or todo text, in characters.
pub const MIN_NAME_LEN: usize = 1;

/// Longest accepted list name or todo text, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Validate a list name against the names already in use.
///
/// Comparison is exact and case-sensitive.
pub fn validate_list_name<S: AsRef<str>>(
    name: &str,
    existing_names: &[S],
) -> Result<(), ValidationError> {
    if existing_names.iter().any(|existing| existing.as_ref() == name) {
        return Err(ValidationError::DuplicateName);
    }
    validate_length(name, NameField::ListName)
}

/// Validate the text of a todo. Duplicate todos are allowed.
pub fn validate_todo_text(text: &str) -> Result<(), ValidationError> {
    validate_length(text, NameField::TodoText)
}

fn validate_length(value: &str, field: NameField) -> Result<(), ValidationError> {
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&value.chars().count()) {
        return Err(ValidationError::InvalidLength { field });
    }
    Ok(())
}
