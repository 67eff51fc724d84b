//! Connection settings for the CLI
//!
//! Priority order (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (DATABASE_URL, DATABASE_USER, DATABASE_PASSWORD,
//!    USERCRUD_MAX_CONNECTIONS), including those loaded from .env files
//! 3. ~/.usercrud/config.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use usercrud_core::db::DEFAULT_MAX_CONNECTIONS;
use usercrud_core::CrudConfig;

/// Get the usercrud config directory path (~/.usercrud)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".usercrud"))
}

/// Default TOML config location (~/.usercrud/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load .env files from the current directory, then ~/.usercrud/.env.
///
/// dotenvy never overwrites variables that are already set, so the first
/// file wins and the real environment beats both. Returns the files loaded;
/// the caller logs them once tracing is up.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// `~/.usercrud/config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub max_connections: Option<u32>,
}

impl FileConfig {
    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file is an empty config; an unreadable or malformed one is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Connection flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// PostgreSQL URL, e.g. postgres://localhost:5432/users
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Database user
    #[arg(long = "db-user", env = "DATABASE_USER", global = true)]
    pub user: Option<String>,

    /// Database password
    #[arg(long = "db-password", env = "DATABASE_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "USERCRUD_MAX_CONNECTIONS", global = true)]
    pub max_connections: Option<u32>,

    /// Config file (default: ~/.usercrud/config.toml)
    #[arg(long, env = "USERCRUD_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Fully merged connection settings
#[derive(Clone)]
pub struct ConnectionSettings {
    pub url: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

impl ConnectionArgs {
    /// Load the config file named by `--config` (or the default) and merge.
    pub fn resolve(&self) -> Result<ConnectionSettings> {
        let file = FileConfig::load(self.config.as_deref())?;
        self.merge(file)
    }

    /// Flags/env over file values. Only the URL is mandatory.
    pub fn merge(&self, file: FileConfig) -> Result<ConnectionSettings> {
        let db = file.database;
        let url = self.database_url.clone().or(db.url).context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.usercrud/config.toml",
        )?;

        Ok(ConnectionSettings {
            url,
            user: self.user.clone().or(db.user).unwrap_or_default(),
            password: self.password.clone().or(db.password).unwrap_or_default(),
            max_connections: self
                .max_connections
                .or(db.max_connections)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl ConnectionSettings {
    pub fn crud_config(&self) -> CrudConfig {
        CrudConfig::new(&self.url, &self.user, &self.password)
            .with_max_connections(self.max_connections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [database]
        url = "postgres://db.internal:5432/users"
        user = "file-user"
        password = "file-pass"
        max_connections = 3
    "#;

    #[test]
    fn parses_database_section() {
        let config = FileConfig::parse(SAMPLE).unwrap();
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://db.internal:5432/users")
        );
        assert_eq!(config.database.max_connections, Some(3));
    }

    #[test]
    fn empty_file_is_default() {
        let config = FileConfig::parse("").unwrap();
        assert!(config.database.url.is_none());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(FileConfig::parse("[database\nurl = 1").is_err());
    }

    #[test]
    fn flags_override_file() {
        let args = ConnectionArgs {
            database_url: Some("postgres://localhost/override".to_string()),
            user: Some("flag-user".to_string()),
            ..Default::default()
        };
        let settings = args.merge(FileConfig::parse(SAMPLE).unwrap()).unwrap();

        assert_eq!(settings.url, "postgres://localhost/override");
        assert_eq!(settings.user, "flag-user");
        assert_eq!(settings.password, "file-pass");
        assert_eq!(settings.max_connections, 3);
    }

    #[test]
    fn missing_url_is_an_error() {
        let err = ConnectionArgs::default()
            .merge(FileConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }

    #[test]
    fn defaults_fill_the_rest() {
        let args = ConnectionArgs {
            database_url: Some("postgres://localhost/users".to_string()),
            ..Default::default()
        };
        let settings = args.merge(FileConfig::default()).unwrap();

        assert_eq!(settings.user, "");
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(settings.crud_config().max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn debug_hides_password() {
        let settings = ConnectionArgs::default()
            .merge(FileConfig::parse(SAMPLE).unwrap())
            .unwrap();
        let rendered = format!("{:?}", settings);

        assert!(!rendered.contains("file-pass"));
        assert!(rendered.contains("file-user"));
        assert!(rendered.contains("postgres://db.internal:5432/users"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = FileConfig::load(Some(&path)).unwrap();
        assert_eq!(config.database.user.as_deref(), Some("file-user"));
    }

    #[test]
    fn load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
