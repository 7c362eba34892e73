//! Rencana CLI - lesson planning from curriculum standards.
//!
//! The `rencana` command runs the three generation stages (learning
//! objectives, learning sequence, lesson plan), stores each stage's output in
//! an artifact directory, and exports Word-compatible documents.

mod commands;
mod config;
mod display;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{export, init, objectives, plan, run, sequence, show};

/// Rencana - learning objectives, sequences and lesson plans from curriculum standards
#[derive(Parser, Debug)]
#[command(
    name = "rencana",
    author,
    version,
    about = "Rencana - lesson planning from curriculum standards",
    long_about = "Rencana turns curriculum standards (Capaian Pembelajaran) into learning objectives,\na learning sequence, and deep-learning lesson plans using a generative model."
)]
struct Args {
    /// Log level or filter (trace, debug, info, warn, error, or `rencana_core=debug`)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Model provider: gemini or mock (overrides RENCANA_ENGINE)
    #[arg(short, long, global = true)]
    engine: Option<String>,

    /// Model id (overrides RENCANA_MODEL)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Artifact and export directory (overrides RENCANA_OUTPUT)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Stored artifact kinds.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    Objectives,
    Sequence,
    Plan,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a session template to fill in
    ///
    /// The session file holds the school, teacher, subject, phase, class and
    /// academic year, plus up to six curriculum standards.
    Init {
        /// Target file (defaults to ./session.json)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Stage 1: generate learning objectives from a session file
    ///
    /// Requests six objectives per curriculum standard, one standard at a time.
    Objectives {
        /// Session file
        session: PathBuf,

        /// Also write the Word document
        #[arg(long)]
        export: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stage 2: generate the learning sequence from stored objectives
    Sequence {
        /// Also write the Word document
        #[arg(long)]
        export: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stage 3: generate a lesson plan for one objective
    Plan {
        /// Objective number (as listed by `show objectives`) or its exact text
        objective: String,

        /// Also write the Word document
        #[arg(long)]
        export: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run all three stages in order
    Run {
        /// Session file
        session: PathBuf,

        /// Objective to plan (number or exact text)
        #[arg(long, default_value = "1")]
        objective: String,

        /// Write the Word documents for every stage
        #[arg(long)]
        export: bool,
    },

    /// Display stored results
    Show {
        #[arg(value_enum)]
        artifact: Artifact,

        /// Objective number of the plan to show (defaults to the lowest stored)
        #[arg(short, long)]
        number: Option<usize>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a Word document from stored results
    Export {
        #[arg(value_enum)]
        artifact: Artifact,

        /// Objective number of the plan to export (defaults to the lowest stored)
        #[arg(short, long)]
        number: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = dispatch(args).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn dispatch(args: Args) -> anyhow::Result<()> {
    let file_config = config::load_config()?;
    init_tracing(args.log_level.as_deref().or(file_config.log_level.as_deref()));

    let overrides = config::Overrides { engine: args.engine, model: args.model, output: args.output };

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Init { path, force } => init::execute(path, force),
        Command::Completions { shell } => {
            let mut cmd = Args::command();
            generate(shell, &mut cmd, "rencana", &mut std::io::stdout());
            Ok(())
        }
        Command::Objectives { session, export, json } => {
            let settings = config::resolve(file_config, overrides)?;
            objectives::execute(&settings, &session, export, json).await
        }
        Command::Sequence { export, json } => {
            let settings = config::resolve(file_config, overrides)?;
            sequence::execute(&settings, export, json).await
        }
        Command::Plan { objective, export, json } => {
            let settings = config::resolve(file_config, overrides)?;
            plan::execute(&settings, &objective, export, json).await
        }
        Command::Run { session, objective, export } => {
            let settings = config::resolve(file_config, overrides)?;
            run::execute(&settings, &session, &objective, export).await
        }
        Command::Show { artifact, number, json } => {
            let settings = config::resolve(file_config, overrides)?;
            show::execute(&settings, artifact, number, json)
        }
        Command::Export { artifact, number } => {
            let settings = config::resolve(file_config, overrides)?;
            export::execute(&settings, artifact, number)
        }
    }
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(configured: Option<&str>) {
    let filter = configured
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
