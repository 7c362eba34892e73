//! Rencana Core - the three-stage lesson planning pipeline.
//!
//! This crate provides:
//! - Session input validation and the records exchanged between stages
//! - Response schemas and prompts for each stage
//! - `LessonPlanner`, which drives a `Model` through the stages
//! - Word-compatible document export and artifact storage
//!
//! # Example
//!
//! ```rust,no_run
//! use rencana_core::{LessonPlanner, SessionInput, flatten_objectives};
//! use rencana_models::MockModel;
//! use std::sync::Arc;
//!
//! # async fn run() -> rencana_core::Result<()> {
//! let session = SessionInput::template().validate()?;
//! let planner = LessonPlanner::new(Arc::new(MockModel::new("mock".to_string())));
//!
//! let objectives = flatten_objectives(planner.expand_objectives(&session.info, &session.standards).await?);
//! let sequence = planner.synthesize_sequence(&objectives).await?;
//! let plan = planner.plan_for(&session.info, &objectives, &sequence, "1").await?;
//! # let _ = plan;
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod prompt;
pub mod records;
pub mod schema;
pub mod session;
pub mod stages;
pub mod vocab;

pub use artifacts::{ArtifactStore, StoredPlan};
pub use config::{ConfigError, PlannerConfig};
pub use error::{PlannerError, Result, Stage};
pub use export::{DocumentRenderer, ExportedDocument};
pub use records::{
    CurriculumStandard, LessonPlanDocument, ObjectiveRecord, SequenceRecord, SessionInfo,
};
pub use session::{
    SessionInput, find_objective, flatten_objectives, objective_position, relevant_sequences,
};
pub use stages::LessonPlanner;
pub use vocab::{CharacterValue, ProfileDimension};
