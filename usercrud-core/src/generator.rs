//! Script-based database bootstrap
//!
//! Prepares a table from static SQL files before tests (or a fresh
//! deployment) run. For a table `t` the generator looks in its script root
//! for `t_schema.sql`, which must exist, and `t_data.sql`, which is run
//! when present.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::{debug, info};

use crate::error::{GeneratorError, GeneratorResult};
use crate::models::{is_blank, require_not_blank, ValidationError};

const BLANK_CREDENTIALS: &str = "Credentials must be non-null and not blank";

/// Table names double as file name prefixes, so keep them path-safe.
static TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_-]*$").expect("invalid table regex"));

/// One script the generator will try to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    pub name: String,
    pub path: PathBuf,
    pub required: bool,
}

/// Replays `<table>_schema.sql` / `<table>_data.sql` from a script root
#[derive(Debug, Clone)]
pub struct DatabaseGenerator {
    scripts_dir: PathBuf,
}

impl DatabaseGenerator {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
        }
    }

    /// Generator over the scripts shipped with this crate (`users`).
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts"))
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Open a single, unpooled connection.
    ///
    /// Fails with `InvalidArgument` before any I/O if a credential is blank.
    pub async fn connect(url: &str, user: &str, password: &str) -> GeneratorResult<PgConnection> {
        if is_blank(url) || is_blank(user) || is_blank(password) {
            return Err(GeneratorError::invalid_argument(BLANK_CREDENTIALS));
        }

        let options = PgConnectOptions::from_str(url)?
            .username(user)
            .password(password);
        let connection = PgConnection::connect_with(&options).await?;

        info!(
            host = options.get_host(),
            port = options.get_port(),
            user,
            "connection established"
        );
        Ok(connection)
    }

    /// Validate `table` and list the scripts that belong to it, in run order.
    pub fn scripts_for(&self, table: &str) -> GeneratorResult<Vec<ScriptFile>> {
        require_not_blank("table name", table)?;
        if !TABLE_RE.is_match(table) {
            return Err(ValidationError::InvalidFormat {
                field: "table name",
                reason: "must be alphanumeric with hyphens/underscores",
            }
            .into());
        }

        Ok([("schema", true), ("data", false)]
            .into_iter()
            .map(|(kind, required)| {
                let name = format!("{}_{}.sql", table, kind);
                ScriptFile {
                    path: self.scripts_dir.join(&name),
                    name,
                    required,
                }
            })
            .collect())
    }

    /// Create and populate `table` from its scripts.
    ///
    /// Returns the names of the scripts that were executed.
    pub async fn generate_from_script(
        &self,
        connection: &mut PgConnection,
        table: &str,
    ) -> GeneratorResult<Vec<String>> {
        let scripts = self.scripts_for(table)?;

        if let Err(err) = connection.ping().await {
            debug!(error = %err, table, "connection failed ping");
            return Err(GeneratorError::ConnectionClosed);
        }

        let mut executed = Vec::with_capacity(scripts.len());
        for script in scripts {
            let Some(sql) = read_script(&script).await? else {
                debug!(script = %script.name, "optional script absent, skipping");
                continue;
            };

            sqlx::raw_sql(&sql).execute(&mut *connection).await?;
            info!(script = %script.name, table, "script executed");
            executed.push(script.name);
        }

        Ok(executed)
    }
}

/// Read a script; `None` only for a missing optional script.
async fn read_script(script: &ScriptFile) -> GeneratorResult<Option<String>> {
    match tokio::fs::read_to_string(&script.path).await {
        Ok(sql) => Ok(Some(sql)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !script.required => Ok(None),
        Err(err) => Err(GeneratorError::read_failed(&script.name, err)),
    }
}
