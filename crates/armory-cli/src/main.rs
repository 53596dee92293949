//! Armory CLI Application
//!
//! Command-line front end for the armory game-data catalog.

mod args;
mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use armory_core::{Catalog, CatalogBuilder};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        command,
    } = Args::parse();

    match command {
        Commands::Schema { kind } => cli::show_schema(kind),
        Commands::Lookup { command } => {
            Cli::new(open_catalog(database_file).await?)
                .handle_lookup_command(command)
                .await
        }
        Commands::Resource(command) => {
            Cli::new(open_catalog(database_file).await?)
                .handle_resource_command(command)
                .await
        }
    }
}

async fn open_catalog(database_file: Option<PathBuf>) -> Result<Catalog> {
    let catalog = CatalogBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize catalog")?;

    info!("Armory started with {}", catalog.database_path().display());
    Ok(catalog)
}
