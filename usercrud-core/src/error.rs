//! Structured error types for usercrud-core.
//!
//! Uses `thiserror` so library consumers can match on the failure class.
//! The CLI wraps these in `anyhow` for operator-facing messages.

use std::io;
use thiserror::Error;

use crate::models::ValidationError;

/// Error returned by `Crud` operations
#[derive(Error, Debug)]
pub enum CrudError {
    /// Out-of-contract argument, raised before any I/O
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Pool, driver or constraint failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CrudError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias for CRUD operations
pub type CrudResult<T> = std::result::Result<T, CrudError>;

/// Error returned by `DatabaseGenerator`
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Blank credentials or table name
    #[error("{0}")]
    InvalidArgument(String),

    /// Connection no longer usable
    #[error("Connection must not be closed")]
    ConnectionClosed,

    /// Expected script is missing from the script root
    #[error("{script} - file not found")]
    ScriptNotFound { script: String },

    /// Script exists but could not be read
    #[error("Unexpected exception while reading {script}: {source}")]
    Io {
        script: String,
        #[source]
        source: io::Error,
    },

    /// Connect or script execution failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl GeneratorError {
    /// Create an invalid-argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Map a read failure on `script`, splitting out the not-found case
    pub fn read_failed(script: impl Into<String>, source: io::Error) -> Self {
        let script = script.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::ScriptNotFound { script }
        } else {
            Self::Io { script, source }
        }
    }
}

impl From<ValidationError> for GeneratorError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

/// Result type alias for bootstrap operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;
