use thiserror::Error;

/// Errors raised while constructing records, before any graph call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{record} name must not be empty")]
    EmptyName { record: &'static str },

    #[error("unknown {field} `{value}`")]
    UnknownVariant { field: &'static str, value: String },

    #[error("duplicate {record} name `{name}`")]
    DuplicateName { record: &'static str, name: String },
}

/// Reject names that are empty or whitespace only.
pub(crate) fn require_name(record: &'static str, name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { record });
    }
    Ok(name)
}
