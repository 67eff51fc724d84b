//! User record and identifier

use super::validation::{validate_username, ValidationError};

/// A user as the application sees it.
///
/// The row identifier is assigned by the database on insert and is never
/// held here; callers reference existing rows by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    username: String,
}

impl User {
    /// Wrap a username. No validation happens here; `CrudController`
    /// rejects blank usernames before issuing any statement.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check the record invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)
    }
}

/// Validated row identifier (strictly positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Create an identifier, rejecting zero and negative values.
    ///
    /// # Example
    /// ```
    /// use usercrud_core::models::UserId;
    ///
    /// assert!(UserId::new(1).is_ok());
    /// assert!(UserId::new(0).is_err());
    /// assert!(UserId::new(-1).is_err());
    /// ```
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::NonPositiveId { id });
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}
