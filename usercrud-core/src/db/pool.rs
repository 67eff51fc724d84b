//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Pools are built lazily
//! so constructing a controller never performs I/O.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for single-table tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection parameters for a `CrudController`
#[derive(Clone)]
pub struct CrudConfig {
    pub url: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

impl CrudConfig {
    pub fn new(url: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Parse the URL and apply the credentials on top of it.
    ///
    /// Empty user/password leave whatever the URL carries.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let mut options = PgConnectOptions::from_str(&self.url)?;
        if !self.user.is_empty() {
            options = options.username(&self.user);
        }
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        Ok(options)
    }
}

impl std::fmt::Debug for CrudConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Create a lazily-connecting PostgreSQL pool.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed. Connectivity problems only
/// show up on first acquire.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&CrudConfig::new("postgres://localhost/users", "admin", "admin"))?;
/// ```
pub fn create_pool(config: &CrudConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;
    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}
