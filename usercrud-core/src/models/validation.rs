//! Validation error types and argument checks

use std::fmt;

/// Validation error for CRUD and bootstrap arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier is zero or negative
    NonPositiveId { id: i64 },

    /// Field is empty or whitespace only
    Blank { field: &'static str },

    /// String doesn't match required format (e.g., table name)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { id } => write!(f, "id must be positive, got {}", id),
            Self::Blank { field } => write!(f, "{} must not be blank", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// True when `s` is empty or every char is whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Reject blank values for `field`.
pub fn require_not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

/// Validate a username.
///
/// Only blankness is checked here. Length and character set are left to the
/// column constraints in `users_schema.sql`.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    require_not_blank("username", username)
}
