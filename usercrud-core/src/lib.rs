//! usercrud-core: data access for the `users` table
//!
//! - [`CrudController`] validates arguments and runs one parameterized
//!   statement per call on a pooled connection.
//! - [`DatabaseGenerator`] prepares a database from `<table>_schema.sql` and
//!   `<table>_data.sql` scripts.

pub mod db;
pub mod error;
pub mod generator;
pub mod models;

pub use db::{Crud, CrudConfig, CrudController};
pub use error::{CrudError, CrudResult, GeneratorError, GeneratorResult};
pub use generator::{DatabaseGenerator, ScriptFile};
pub use models::{User, UserId, ValidationError};
