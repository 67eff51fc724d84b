//! Shared helpers for database-backed tests
//!
//! Each `#[sqlx::test]` gets a throwaway database; `seed` fills it from the
//! bundled `users` scripts.

#![allow(dead_code)] // each test binary uses a different subset

use sqlx::PgPool;
use usercrud_core::{CrudController, DatabaseGenerator};

/// Usernames inserted by `users_data.sql`, in id order starting at 1.
pub const FIXTURE_USERNAMES: [&str; 10] = [
    "Alice", "Bob", "Carol", "Dave", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("usercrud_core=debug")
        .with_test_writer()
        .try_init();
}

/// Run the bundled users scripts against `pool`.
pub async fn seed(pool: &PgPool) -> anyhow::Result<Vec<String>> {
    init_tracing();
    let mut conn = pool.acquire().await?;
    let executed = DatabaseGenerator::bundled()
        .generate_from_script(&mut conn, "users")
        .await?;
    Ok(executed)
}

/// Seeded database plus a controller over it.
pub async fn seeded_controller(pool: PgPool) -> anyhow::Result<CrudController> {
    seed(&pool).await?;
    Ok(CrudController::from_pool(pool))
}

pub async fn row_count(pool: &PgPool) -> anyhow::Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn username_of(pool: &PgPool, id: i64) -> anyhow::Result<Option<String>> {
    let name = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(name)
}

pub async fn max_id(pool: &PgPool) -> anyhow::Result<i64> {
    let id = sqlx::query_scalar::<_, i64>("SELECT MAX(id) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(id)
}
