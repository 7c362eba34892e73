//! Export command: Word documents from stored artifacts.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use rencana_core::{ArtifactStore, ExportedDocument, StoredPlan};
use std::path::PathBuf;

use crate::Artifact;
use crate::config::Settings;

/// Execute the export command.
pub fn execute(settings: &Settings, artifact: Artifact, number: Option<usize>) -> Result<()> {
    let store = settings.store();
    let renderer = settings.renderer()?;

    let doc = match artifact {
        Artifact::Objectives => {
            let session = store.load_session()?;
            renderer.export_objectives(&session.info, &store.load_objectives()?)?
        }
        Artifact::Sequence => {
            let session = store.load_session()?;
            renderer.export_sequence(&session.info, &store.load_sequence()?)?
        }
        Artifact::Plan => {
            let stored = load_plan(&store, number)?;
            renderer.export_plan(&stored.objective, &stored.plan)?
        }
    };

    write_document(settings, &doc, false)?;
    Ok(())
}

/// The plan for objective `number`, or the lowest-numbered stored plan.
pub fn load_plan(store: &ArtifactStore, number: Option<usize>) -> Result<StoredPlan> {
    let index = match number {
        Some(n) => n,
        None => match store.plan_indices()?.first() {
            Some(first) => *first,
            None => bail!("No lesson plan stored in {}; run `rencana plan <objective>` first", store.dir().display()),
        },
    };
    Ok(store.load_plan(index)?)
}

/// Writes `doc` into the output directory.
pub fn write_document(settings: &Settings, doc: &ExportedDocument, quiet: bool) -> Result<PathBuf> {
    let path = doc
        .write_to(&settings.output_dir)
        .with_context(|| format!("Failed to write {}", doc.filename))?;
    if !quiet {
        println!("{} Exported {}", "✓".green(), path.display().to_string().bold());
    }
    Ok(path)
}
