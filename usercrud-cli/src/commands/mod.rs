//! Command implementations for the usercrud CLI

pub mod bootstrap;
pub mod user;

pub use bootstrap::run_bootstrap;
pub use user::{run_create, run_delete, run_read, run_update};
