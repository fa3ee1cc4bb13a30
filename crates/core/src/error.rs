use crate::types::DbId;

/// Which user-submitted field a validation rule was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    ListName,
    TodoText,
}

/// A rejected list name or todo text.
///
/// The `Display` output is the message shown inline on the re-rendered form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("List name must be unique.")]
    DuplicateName,

    #[error("{field} must be between 1 and 100 characters.")]
    InvalidLength { field: NameField },
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NameField::ListName => "List name",
            NameField::TodoText => "Todo text",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}
