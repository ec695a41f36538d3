//! File workflow commands: analyze, rename, organize.

use crate::cli::args::OutputFormat;
use crate::cli::commands::folders::{confirm, print_report, spinner};
use crate::core::engine::FolderScanEngine;
use crate::models::entry::FileEntry;
use crate::services::metadata::MetadataClient;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Preview canonical file names without renaming.
pub async fn analyze(
    engine: &FolderScanEngine,
    path: &str,
    enrich: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut entries = engine.scan_files(path).await?;
    engine.analyze_files(&mut entries);

    if enrich {
        let pb = spinner("Looking up episode titles...");
        let client = MetadataClient::new();
        engine.refine_episode_titles(&mut entries, &client).await;
        pb.finish_and_clear();
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Table => {
            print_analysis(&entries);
        }
    }

    Ok(())
}

/// Rename media files to canonical names.
pub async fn rename(
    engine: &FolderScanEngine,
    path: &str,
    enrich: bool,
    yes: bool,
) -> Result<()> {
    let mut entries = engine.scan_files(path).await?;
    engine.analyze_files(&mut entries);

    if enrich {
        let client = MetadataClient::new();
        engine.refine_episode_titles(&mut entries, &client).await;
    }

    let changed = entries.iter().filter(|e| e.has_changes()).count();
    if changed == 0 {
        println!("{}", "Nothing to rename.".green());
        return Ok(());
    }

    print_analysis(&entries);

    if !yes && !confirm(&format!("Rename {} files?", changed))? {
        println!("Aborted.");
        return Ok(());
    }

    let pb = spinner(&format!("Renaming {} files...", changed));
    let report = engine.apply_files(&mut entries).await;
    pb.finish_and_clear();

    print_report(&report);
    Ok(())
}

/// Move files into a Plex library layout.
pub async fn organize(engine: &FolderScanEngine, path: &str, target: &Path) -> Result<()> {
    let mut entries = engine.scan_files(path).await?;
    engine.analyze_files(&mut entries);

    if entries.is_empty() {
        println!("{}", "No media files found.".yellow());
        return Ok(());
    }

    let pb = spinner(&format!(
        "Organizing {} files into {}...",
        entries.len(),
        target.display()
    ));
    let report = engine.organize_files(&mut entries, target).await;
    pb.finish_and_clear();

    print_report(&report);
    Ok(())
}

fn print_analysis(entries: &[FileEntry]) {
    println!("{}", "[Analysis]".bold().cyan());
    for entry in entries {
        let kind = format!("[{}]", entry.kind);
        match entry.new_name.as_deref() {
            Some(new_name) if entry.has_changes() => {
                println!(
                    "  {:9} {} {}",
                    kind.blue(),
                    entry.name.strikethrough(),
                    new_name.green()
                );
            }
            _ => {
                println!("  {:9} {}", kind.blue(), entry.name.dimmed());
            }
        }
    }
    println!();
}
