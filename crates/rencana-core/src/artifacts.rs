//! Stage outputs persisted between invocations.
//!
//! Each stage writes its result as pretty JSON into one directory; the next
//! stage reads it back. Nothing here is read unless a command asks for it.

use crate::error::{PlannerError, Result, Stage};
use crate::records::{LessonPlanDocument, ObjectiveRecord, SequenceRecord};
use crate::session::SessionInput;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SESSION_FILE: &str = "session.json";
pub const OBJECTIVES_FILE: &str = "objectives.json";
pub const SEQUENCE_FILE: &str = "sequence.json";

/// A plan saved alongside the number of the objective it was written for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlan {
    /// 1-based position of the objective in `objectives.json`.
    pub objective_index: usize,
    #[serde(rename = "tujuanPembelajaran")]
    pub objective: String,
    pub plan: LessonPlanDocument,
}

/// Artifact directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn plan_file(index: usize) -> String {
        format!("plan-{index}.json")
    }

    pub fn save_session(&self, session: &SessionInput) -> Result<PathBuf> {
        self.write(SESSION_FILE, session)
    }

    pub fn load_session(&self) -> Result<SessionInput> {
        self.read(SESSION_FILE, "rencana objectives <session.json>")
    }

    pub fn save_objectives(&self, objectives: &[ObjectiveRecord]) -> Result<PathBuf> {
        self.write(OBJECTIVES_FILE, &objectives)
    }

    pub fn load_objectives(&self) -> Result<Vec<ObjectiveRecord>> {
        self.read(OBJECTIVES_FILE, "rencana objectives <session.json>")
    }

    pub fn save_sequence(&self, sequence: &[SequenceRecord]) -> Result<PathBuf> {
        self.write(SEQUENCE_FILE, &sequence)
    }

    pub fn load_sequence(&self) -> Result<Vec<SequenceRecord>> {
        self.read(SEQUENCE_FILE, "rencana sequence")
    }

    pub fn save_plan(&self, plan: &StoredPlan) -> Result<PathBuf> {
        self.write(&Self::plan_file(plan.objective_index), plan)
    }

    pub fn load_plan(&self, index: usize) -> Result<StoredPlan> {
        self.read(&Self::plan_file(index), "rencana plan <objective>")
    }

    /// Objective numbers that have a stored plan, ascending.
    pub fn plan_indices(&self) -> Result<Vec<usize>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut indices: Vec<usize> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                name.strip_prefix("plan-")?.strip_suffix(".json")?.parse().ok()
            })
            .collect();
        indices.sort_unstable();
        Ok(indices)
    }

    /// Removes artifacts built on top of `stage`'s output, so a rerun never
    /// leaves a sequence or plan that refers to replaced objectives.
    pub fn clear_downstream(&self, stage: Stage) -> Result<()> {
        if stage == Stage::Objectives {
            self.remove(SEQUENCE_FILE)?;
        }
        if stage != Stage::Plan {
            for index in self.plan_indices()? {
                self.remove(&Self::plan_file(index))?;
            }
        }
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.dir.join(name);
        if path.exists() {
            std::fs::remove_file(&path)?;
            debug!(path = %path.display(), "Stale artifact removed");
        }
        Ok(())
    }

    fn write<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
        debug!(path = %path.display(), "Artifact saved");
        Ok(path)
    }

    fn read<T: DeserializeOwned>(&self, name: &str, command: &'static str) -> Result<T> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Err(PlannerError::MissingArtifact { artifact: path.display().to_string(), command });
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
