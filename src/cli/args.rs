//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Plex Sanitizer - Clean media folder and file names
#[derive(Parser, Debug)]
#[command(name = "plex-sanitizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (rule catalog, drive fallbacks, fixture)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitize folder names
    Folders {
        #[command(subcommand)]
        action: FoldersAction,
    },

    /// Rename media files to canonical names
    Files {
        #[command(subcommand)]
        action: FilesAction,
    },

    /// Show the sanitization rule catalog
    Rules,
}

#[derive(Subcommand, Debug)]
pub enum FoldersAction {
    /// List the folders under a path
    Scan {
        /// Root path (local or \\server\share network address)
        #[arg(value_name = "PATH")]
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Preview sanitized folder names without renaming
    Preview {
        /// Root path (local or \\server\share network address)
        #[arg(value_name = "PATH")]
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Rename folders to their sanitized names
    Apply {
        /// Root path (local or \\server\share network address)
        #[arg(value_name = "PATH")]
        path: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilesAction {
    /// Preview canonical file names without renaming
    Analyze {
        /// Folder containing media files
        #[arg(value_name = "PATH")]
        path: String,

        /// Look up episode titles from the metadata provider
        #[arg(long)]
        enrich: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Rename media files to canonical names
    Rename {
        /// Folder containing media files
        #[arg(value_name = "PATH")]
        path: String,

        /// Look up episode titles from the metadata provider
        #[arg(long)]
        enrich: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move files into a Plex library layout
    Organize {
        /// Folder containing media files
        #[arg(value_name = "PATH")]
        path: String,

        /// Target library base directory
        #[arg(short, long, value_name = "TARGET")]
        target: PathBuf,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
