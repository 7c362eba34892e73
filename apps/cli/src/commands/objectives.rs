//! Stage 1 command: learning objectives.

use anyhow::{Context, Result};
use colored::Colorize;
use rencana_core::{ObjectiveRecord, SessionInput, Stage, flatten_objectives};
use std::path::Path;

use super::export::write_document;
use crate::config::Settings;
use crate::display;

/// Execute the objectives command.
pub async fn execute(settings: &Settings, session_path: &Path, export: bool, json: bool) -> Result<()> {
    let session = load_session(session_path)?;
    let objectives = generate(settings, &session, json).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&objectives)?);
    } else {
        display::print_info(&session.info);
        display::print_objectives(&objectives);
    }

    if export {
        let doc = settings.renderer()?.export_objectives(&session.info, &objectives)?;
        write_document(settings, &doc, json)?;
    }
    Ok(())
}

pub fn load_session(path: &Path) -> Result<SessionInput> {
    let session = SessionInput::load(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;
    Ok(session.validate()?)
}

/// Runs Stage 1 and stores the session and its objectives.
pub async fn generate(settings: &Settings, session: &SessionInput, quiet: bool) -> Result<Vec<ObjectiveRecord>> {
    let planner = settings.planner()?;
    if !quiet {
        println!(
            "{} Generating learning objectives for {} standard(s) with {}...",
            "→".cyan(),
            session.standards.len(),
            planner.model_id()
        );
    }

    let objectives = flatten_objectives(planner.expand_objectives(&session.info, &session.standards).await?);

    let store = settings.store();
    store.save_session(session)?;
    store.save_objectives(&objectives)?;
    store.clear_downstream(Stage::Objectives)?;

    if !quiet {
        println!("{} {} objectives saved to {}", "✓".green(), objectives.len(), store.dir().display());
        println!();
    }
    Ok(objectives)
}
