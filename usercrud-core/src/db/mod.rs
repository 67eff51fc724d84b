//! Database layer - connection pool and the users controller
//!
//! # Design Principles
//!
//! - One pooled connection per operation, released on drop
//! - Bind parameters only, never formatted SQL
//! - Missing rows are results, not errors

pub mod controller;
pub mod crud;
pub mod pool;

pub use controller::CrudController;
pub use crud::Crud;
pub use pool::{create_pool, CrudConfig, DEFAULT_MAX_CONNECTIONS};
