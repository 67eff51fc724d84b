//! usercrud CLI - operator front-end for the users table
//!
//! - `bootstrap`: create and seed a table from `<table>_schema.sql` /
//!   `<table>_data.sql`
//! - `create` / `read` / `update` / `delete`: one controller call each

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;
mod config;
mod tracing_setup;

use config::ConnectionArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "usercrud",
    author,
    version,
    about = "Create, read, update and delete rows in the users table",
    long_about = "Validated CRUD calls over a pooled PostgreSQL connection, plus a bootstrap \
                  command that prepares the table from SQL scripts."
)]
struct Cli {
    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create and populate a table from its SQL scripts
    Bootstrap(commands::bootstrap::BootstrapArgs),
    /// Insert a user; the database assigns the id
    Create(commands::user::CreateArgs),
    /// Print the username stored under an id
    Read(commands::user::ReadArgs),
    /// Replace the username stored under an id
    Update(commands::user::UpdateArgs),
    /// Remove the user stored under an id
    Delete(commands::user::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so .env values feed clap's `env` fallbacks.
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    for path in &env_files {
        debug!("Loaded .env from {}", path.display());
    }

    match cli.command {
        Commands::Bootstrap(args) => commands::run_bootstrap(args, &cli.connection).await?,
        Commands::Create(args) => commands::run_create(args, &cli.connection).await?,
        Commands::Read(args) => commands::run_read(args, &cli.connection).await?,
        Commands::Update(args) => commands::run_update(args, &cli.connection).await?,
        Commands::Delete(args) => commands::run_delete(args, &cli.connection).await?,
    }
    Ok(())
}
