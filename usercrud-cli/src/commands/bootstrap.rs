//! Prepare a table from its SQL scripts

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use usercrud_core::DatabaseGenerator;

use crate::config::ConnectionArgs;

/// Arguments for the bootstrap command
#[derive(Parser, Debug)]
pub struct BootstrapArgs {
    /// Table to create; scripts are <table>_schema.sql and <table>_data.sql
    #[arg(long, short, default_value = "users")]
    pub table: String,

    /// Directory holding the scripts (default: scripts bundled with usercrud-core)
    #[arg(long, value_name = "DIR")]
    pub scripts: Option<PathBuf>,
}

pub async fn run_bootstrap(args: BootstrapArgs, connection: &ConnectionArgs) -> Result<()> {
    let settings = connection.resolve()?;
    let generator = args
        .scripts
        .map(DatabaseGenerator::new)
        .unwrap_or_else(DatabaseGenerator::bundled);

    info!(
        table = %args.table,
        scripts = %generator.scripts_dir().display(),
        "bootstrapping table"
    );

    let mut conn = DatabaseGenerator::connect(&settings.url, &settings.user, &settings.password)
        .await
        .context("Failed to connect for bootstrap")?;

    let executed = generator
        .generate_from_script(&mut conn, &args.table)
        .await
        .with_context(|| format!("Failed to bootstrap table '{}'", args.table))?;

    for script in executed {
        println!("{}", script);
    }
    Ok(())
}
