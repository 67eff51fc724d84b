//! Domain models and argument validation
//!
//! Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::{User, UserId};
pub use validation::{is_blank, require_not_blank, validate_username, ValidationError};
