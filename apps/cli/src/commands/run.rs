//! Run command: all three stages in one invocation.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::export::write_document;
use super::{objectives, plan, sequence};
use crate::config::Settings;
use crate::display;

/// Execute the run command.
pub async fn execute(settings: &Settings, session_path: &Path, selector: &str, export: bool) -> Result<()> {
    let session = objectives::load_session(session_path)?;
    display::print_info(&session.info);

    println!("{}", "[1/3] Tujuan Pembelajaran".bold());
    let objectives = objectives::generate(settings, &session, false).await?;
    display::print_objectives(&objectives);
    println!();

    println!("{}", "[2/3] Alur Tujuan Pembelajaran".bold());
    let sequence = sequence::generate(settings, &objectives, false).await?;
    display::print_sequence(&sequence);
    println!();

    println!("{}", "[3/3] Perencanaan Pembelajaran Mendalam".bold());
    let stored = plan::generate(settings, &session, &objectives, &sequence, selector, false).await?;
    display::print_plan(&stored.plan);
    println!();

    if export {
        let renderer = settings.renderer()?;
        write_document(settings, &renderer.export_objectives(&session.info, &objectives)?, false)?;
        write_document(settings, &renderer.export_sequence(&session.info, &sequence)?, false)?;
        write_document(settings, &renderer.export_plan(&stored.objective, &stored.plan)?, false)?;
    }

    println!("{}", "All stages completed.".green().bold());
    Ok(())
}
