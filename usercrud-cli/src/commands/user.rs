//! One CRUD call per invocation against the users table

use anyhow::{Context, Result};
use clap::Parser;
use usercrud_core::{Crud, CrudController, User};

use crate::config::ConnectionArgs;

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Username for the new row
    pub username: String,
}

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// User ID
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// User ID
    #[arg(allow_negative_numbers = true)]
    pub id: i64,

    /// Replacement username
    pub username: String,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// User ID
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

fn controller(connection: &ConnectionArgs) -> Result<CrudController> {
    let settings = connection.resolve()?;
    CrudController::new(&settings.crud_config()).context("Failed to configure connection pool")
}

pub async fn run_create(args: CreateArgs, connection: &ConnectionArgs) -> Result<()> {
    let controller = controller(connection)?;
    controller
        .create(&User::new(args.username))
        .await
        .context("Failed to create user")?;
    println!("created");
    Ok(())
}

/// Prints the username, or `not found`. Absence still exits 0.
pub async fn run_read(args: ReadArgs, connection: &ConnectionArgs) -> Result<()> {
    let controller = controller(connection)?;
    let user = controller
        .read(args.id)
        .await
        .with_context(|| format!("Failed to read user {}", args.id))?;

    match user {
        Some(user) => println!("{}", user.username()),
        None => println!("not found"),
    }
    Ok(())
}

pub async fn run_update(args: UpdateArgs, connection: &ConnectionArgs) -> Result<()> {
    let controller = controller(connection)?;
    controller
        .update(args.id, &User::new(args.username))
        .await
        .with_context(|| format!("Failed to update user {}", args.id))?;
    println!("updated");
    Ok(())
}

pub async fn run_delete(args: DeleteArgs, connection: &ConnectionArgs) -> Result<()> {
    let controller = controller(connection)?;
    controller
        .delete(args.id)
        .await
        .with_context(|| format!("Failed to delete user {}", args.id))?;
    println!("deleted");
    Ok(())
}
