//! Stage 3 command: lesson plan.

use anyhow::Result;
use colored::Colorize;
use rencana_core::{ObjectiveRecord, SequenceRecord, SessionInput, StoredPlan, objective_position};

use super::export::write_document;
use crate::config::Settings;
use crate::display;

/// Execute the plan command.
pub async fn execute(settings: &Settings, selector: &str, export: bool, json: bool) -> Result<()> {
    let store = settings.store();
    let session = store.load_session()?;
    let objectives = store.load_objectives()?;
    let sequence = store.load_sequence()?;

    let stored = generate(settings, &session, &objectives, &sequence, selector, json).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stored.plan)?);
    } else {
        display::print_plan(&stored.plan);
    }

    if export {
        let doc = settings.renderer()?.export_plan(&stored.objective, &stored.plan)?;
        write_document(settings, &doc, json)?;
    }
    Ok(())
}

/// Runs Stage 3 for the selected objective and stores the plan under its number.
pub async fn generate(
    settings: &Settings,
    session: &SessionInput,
    objectives: &[ObjectiveRecord],
    sequence: &[SequenceRecord],
    selector: &str,
    quiet: bool,
) -> Result<StoredPlan> {
    let position = objective_position(objectives, selector)?;
    let objective = &objectives[position];
    let objective_index = position + 1;

    let planner = settings.planner()?;
    if !quiet {
        println!(
            "{} Generating the lesson plan for objective #{} with {}...",
            "→".cyan(),
            objective_index,
            planner.model_id()
        );
        println!("  {}", objective.objective.dimmed());
    }

    let plan = planner.plan_for(&session.info, objectives, sequence, selector).await?;
    let stored = StoredPlan { objective_index, objective: objective.objective.clone(), plan };

    let path = settings.store().save_plan(&stored)?;
    if !quiet {
        println!("{} Lesson plan saved to {}", "✓".green(), path.display());
        println!();
    }
    Ok(stored)
}
