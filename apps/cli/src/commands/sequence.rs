//! Stage 2 command: learning sequence.

use anyhow::Result;
use colored::Colorize;
use rencana_core::{ObjectiveRecord, SequenceRecord, Stage};

use super::export::write_document;
use crate::config::Settings;
use crate::display;

/// Execute the sequence command.
pub async fn execute(settings: &Settings, export: bool, json: bool) -> Result<()> {
    let store = settings.store();
    let session = store.load_session()?;
    let objectives = store.load_objectives()?;

    let sequence = generate(settings, &objectives, json).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
    } else {
        display::print_info(&session.info);
        display::print_sequence(&sequence);
    }

    if export {
        let doc = settings.renderer()?.export_sequence(&session.info, &sequence)?;
        write_document(settings, &doc, json)?;
    }
    Ok(())
}

/// Runs Stage 2 and stores the sequence.
pub async fn generate(settings: &Settings, objectives: &[ObjectiveRecord], quiet: bool) -> Result<Vec<SequenceRecord>> {
    let planner = settings.planner()?;
    if !quiet {
        println!(
            "{} Generating the learning sequence for {} objective(s) with {}...",
            "→".cyan(),
            objectives.len(),
            planner.model_id()
        );
    }

    let sequence = planner.synthesize_sequence(objectives).await?;

    let store = settings.store();
    store.save_sequence(&sequence)?;
    store.clear_downstream(Stage::Sequence)?;

    if !quiet {
        println!("{} {} sequence entries saved to {}", "✓".green(), sequence.len(), store.dir().display());
        println!();
    }
    Ok(sequence)
}
