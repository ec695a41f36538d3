//! Plex Sanitizer CLI
//!
//! A command-line tool for cleaning media folder and file names into
//! Plex-style canonical names.

use clap::Parser;
use plex_sanitizer::cli::{
    args::{Cli, Commands, FilesAction, FoldersAction},
    commands::{files, folders, rules},
};
use plex_sanitizer::core::engine::FolderScanEngine;
use plex_sanitizer::models::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Build the engine from config (rule catalog, drive fallbacks,
    // offline fixture); an invalid rule pattern fails here.
    let config = config::load_config(cli.config.as_deref());
    let engine = FolderScanEngine::from_config(&config)?;

    // Run the appropriate command
    match cli.command {
        Commands::Folders { action } => match action {
            FoldersAction::Scan { path, format } => {
                folders::scan(&engine, &path, format).await?;
            }
            FoldersAction::Preview { path, format } => {
                folders::preview(&engine, &path, format).await?;
            }
            FoldersAction::Apply { path, yes } => {
                folders::apply(&engine, &path, yes).await?;
            }
        },

        Commands::Files { action } => match action {
            FilesAction::Analyze { path, enrich, format } => {
                files::analyze(&engine, &path, enrich, format).await?;
            }
            FilesAction::Rename { path, enrich, yes } => {
                files::rename(&engine, &path, enrich, yes).await?;
            }
            FilesAction::Organize { path, target } => {
                files::organize(&engine, &path, &target).await?;
            }
        },

        Commands::Rules => {
            rules::list(&engine)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("plex_sanitizer=debug")
    } else {
        EnvFilter::new("plex_sanitizer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
