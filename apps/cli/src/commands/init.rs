//! Init command implementation.
//!
//! Writes a session template for the user to fill in.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use rencana_core::SessionInput;
use rencana_core::constants::MAX_STANDARDS;
use std::path::PathBuf;

/// Execute the init command.
pub fn execute(path: Option<PathBuf>, force: bool) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from("session.json"));

    if target.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", target.display());
    }
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(&SessionInput::template())?;
    std::fs::write(&target, content).with_context(|| format!("Failed to write {}", target.display()))?;

    println!("{} {}", "✓".green(), format!("Session template written to {}", target.display()).bold());
    println!();
    println!("Next steps:");
    println!("  1. Fill in the school details and up to {MAX_STANDARDS} curriculum standards");
    println!("  2. rencana objectives {}", target.display());
    println!("  3. rencana sequence");
    println!("  4. rencana plan 1 --export");

    Ok(())
}
