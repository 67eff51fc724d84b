//! User controller over the `users` table
//!
//! Every operation follows the same pattern:
//! - validate arguments before touching the pool
//! - acquire one pooled connection (returned to the pool when dropped)
//! - run a single statement with every user value bound as a parameter

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, trace};

use super::crud::Crud;
use super::pool::{create_pool, CrudConfig};
use crate::error::CrudResult;
use crate::models::{User, UserId};

const INSERT_USER: &str = "INSERT INTO users VALUES (DEFAULT, $1)";
const SELECT_USER: &str = "SELECT * FROM users WHERE id = $1";
const UPDATE_USER: &str = r#"
    UPDATE users
    SET username = $1
    WHERE id = $2
"#;
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

/// User row from database. `id` is selected but not mapped.
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.username)
    }
}

/// CRUD operations for `User` backed by a PostgreSQL pool
#[derive(Clone, Debug)]
pub struct CrudController {
    pool: PgPool,
}

impl CrudController {
    /// Build a controller with its own lazily-connecting pool.
    ///
    /// Must be called from within a Tokio runtime. Fails only if the URL
    /// cannot be parsed.
    pub fn new(config: &CrudConfig) -> CrudResult<Self> {
        Ok(Self {
            pool: create_pool(config)?,
        })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Crud<User> for CrudController {
    async fn create(&self, record: &User) -> CrudResult<()> {
        record.validate()?;

        debug!(username = %record.username(), "inserting user");
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(INSERT_USER)
            .bind(record.username())
            .execute(&mut *conn)
            .await?;

        trace!(rows = result.rows_affected(), "insert complete");
        Ok(())
    }

    async fn read(&self, id: i64) -> CrudResult<Option<User>> {
        let id = UserId::new(id)?;

        debug!(id = id.get(), "reading user");
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, UserRow>(SELECT_USER)
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await?;

        trace!(id = id.get(), found = row.is_some(), "read complete");
        Ok(row.map(User::from))
    }

    async fn update(&self, id: i64, record: &User) -> CrudResult<()> {
        let id = UserId::new(id)?;
        record.validate()?;

        debug!(id = id.get(), username = %record.username(), "updating user");
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(UPDATE_USER)
            .bind(record.username())
            .bind(id.get())
            .execute(&mut *conn)
            .await?;

        // Zero rows means no such id; that is not an error.
        trace!(id = id.get(), rows = result.rows_affected(), "update complete");
        Ok(())
    }

    async fn delete(&self, id: i64) -> CrudResult<()> {
        let id = UserId::new(id)?;

        debug!(id = id.get(), "deleting user");
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(DELETE_USER)
            .bind(id.get())
            .execute(&mut *conn)
            .await?;

        trace!(id = id.get(), rows = result.rows_affected(), "delete complete");
        Ok(())
    }
}
