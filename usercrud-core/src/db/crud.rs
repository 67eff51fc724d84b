//! The four-operation CRUD contract

use async_trait::async_trait;

use crate::error::CrudResult;

/// Create/read/update/delete over one record type keyed by an integer id.
///
/// Lookups by an id that has no row are not errors: `read` yields `None`,
/// `update` and `delete` do nothing.
#[async_trait]
pub trait Crud<T>: Send + Sync {
    /// Insert a new record; the database assigns its id.
    async fn create(&self, record: &T) -> CrudResult<()>;

    /// Fetch the record stored under `id`.
    async fn read(&self, id: i64) -> CrudResult<Option<T>>;

    /// Replace the record stored under `id`.
    async fn update(&self, id: i64, record: &T) -> CrudResult<()>;

    /// Remove the record stored under `id`.
    async fn delete(&self, id: i64) -> CrudResult<()>;
}
