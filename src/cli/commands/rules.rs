//! Rule catalog listing.

use crate::core::engine::FolderScanEngine;
use crate::Result;
use colored::Colorize;

/// Print the ordered rule catalog with active flags.
pub fn list(engine: &FolderScanEngine) -> Result<()> {
    println!("{}", "[Rule catalog]".bold().cyan());
    println!();

    for (index, rule) in engine.rules().rules().iter().enumerate() {
        let marker = if rule.active {
            "on ".green()
        } else {
            "off".red()
        };
        println!("  {:2} [{}] {}", index, marker, rule.name.bold());
        println!("        {}", rule.description.dimmed());
        println!("        {}", rule.pattern_str());
    }

    println!();
    println!(
        "{}",
        "Rules apply in the order shown; edit the config file to change or toggle them.".dimmed()
    );
    Ok(())
}
