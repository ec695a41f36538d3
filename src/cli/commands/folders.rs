//! Folder workflow commands: scan, preview, apply.

use crate::cli::args::OutputFormat;
use crate::core::engine::FolderScanEngine;
use crate::models::entry::{ApplyReport, ApplyStatus, FolderEntry};
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// List the folders under a path.
pub async fn scan(engine: &FolderScanEngine, path: &str, format: OutputFormat) -> Result<()> {
    let outcome = engine.scan_folders(path).await?;

    if outcome.offline {
        println!(
            "{}",
            format!("Path '{}' is not accessible - showing offline fixture data", outcome.root)
                .yellow()
        );
        println!();
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.entries)?);
        }
        OutputFormat::Table => {
            println!("{} {}", "Folders under".bold(), outcome.root);
            for entry in &outcome.entries {
                println!("  {}", entry.name);
            }
            println!();
            println!("{} folders", outcome.entries.len());
        }
    }

    Ok(())
}

/// Preview sanitized names without touching the filesystem.
pub async fn preview(engine: &FolderScanEngine, path: &str, format: OutputFormat) -> Result<()> {
    let mut outcome = engine.scan_folders(path).await?;
    engine.preview_folders(&mut outcome.entries);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.entries)?);
        }
        OutputFormat::Table => {
            print_preview(&outcome.entries);
        }
    }

    Ok(())
}

/// Rename folders to their sanitized names.
pub async fn apply(engine: &FolderScanEngine, path: &str, yes: bool) -> Result<()> {
    let mut outcome = engine.scan_folders(path).await?;
    engine.preview_folders(&mut outcome.entries);

    let changed = outcome.entries.iter().filter(|e| e.has_changes()).count();
    if changed == 0 {
        println!("{}", "Nothing to rename.".green());
        return Ok(());
    }

    print_preview(&outcome.entries);

    if !yes && !confirm(&format!("Rename {} folders?", changed))? {
        println!("Aborted.");
        return Ok(());
    }

    let pb = spinner(&format!("Renaming {} folders...", changed));
    let report = engine.apply_folders(&mut outcome.entries).await;
    pb.finish_and_clear();

    print_report(&report);
    Ok(())
}

fn print_preview(entries: &[FolderEntry]) {
    println!("{}", "[Preview]".bold().cyan());
    for entry in entries {
        match entry.new_name.as_deref() {
            Some(new_name) if entry.has_changes() => {
                println!("  {} {}", entry.name.strikethrough(), new_name.green());
            }
            _ => {
                println!("  {}", entry.name.dimmed());
            }
        }
    }
    println!();
}

/// Print an apply report, one line per attempted entry.
pub fn print_report(report: &ApplyReport) {
    if report.demo_mode {
        println!(
            "{}",
            "Demo mode: target not reachable, changes applied in memory only".yellow()
        );
    }

    for outcome in &report.outcomes {
        match outcome.status {
            ApplyStatus::Renamed => {
                println!("  {} {} -> {}", "ok".green(), outcome.original, outcome.target);
            }
            ApplyStatus::Collision => {
                println!(
                    "  {} {} -> {} ({})",
                    "collision".red(),
                    outcome.original,
                    outcome.target,
                    outcome.message.as_deref().unwrap_or("target exists")
                );
            }
            ApplyStatus::Failed => {
                println!(
                    "  {} {} -> {} ({})",
                    "failed".red(),
                    outcome.original,
                    outcome.target,
                    outcome.message.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    println!();
    if report.all_successful {
        println!("{}", "All renames succeeded.".bold().green());
    } else {
        println!("{}", "Some renames failed, see above.".bold().red());
    }
}

/// A ticking spinner with a message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Ask a yes/no question on stdin.
pub fn confirm(question: &str) -> Result<bool> {
    use std::io::Write;

    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
