//! Show command: re-display stored results.

use anyhow::Result;

use super::export::load_plan;
use crate::Artifact;
use crate::config::Settings;
use crate::display;

/// Execute the show command.
pub fn execute(settings: &Settings, artifact: Artifact, number: Option<usize>, json: bool) -> Result<()> {
    let store = settings.store();

    match artifact {
        Artifact::Objectives => {
            let objectives = store.load_objectives()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&objectives)?);
            } else {
                display::print_info(&store.load_session()?.info);
                display::print_objectives(&objectives);
            }
        }
        Artifact::Sequence => {
            let sequence = store.load_sequence()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sequence)?);
            } else {
                display::print_info(&store.load_session()?.info);
                display::print_sequence(&sequence);
            }
        }
        Artifact::Plan => {
            let stored = load_plan(&store, number)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stored)?);
            } else {
                println!("Objective #{}: {}", stored.objective_index, stored.objective);
                println!();
                display::print_plan(&stored.plan);
            }
        }
    }
    Ok(())
}
