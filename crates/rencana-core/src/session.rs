//! Session input and the array transformations between stages.

use crate::constants::{MAX_STANDARDS, PHASES};
use crate::error::{PlannerError, Result};
use crate::records::{CurriculumStandard, ObjectiveRecord, SequenceRecord, SessionInfo};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Everything the user supplies before Stage 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInput {
    pub info: SessionInfo,
    #[serde(rename = "capaianPembelajaran")]
    pub standards: Vec<CurriculumStandard>,
}

impl SessionInput {
    /// Reads a session file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// A fillable template, as written by `rencana init`.
    pub fn template() -> Self {
        Self {
            info: SessionInfo {
                school_name: "MTs Negeri 1 Contoh".to_string(),
                teacher_name: "Nama Guru".to_string(),
                subject: "Ilmu Pengetahuan Alam".to_string(),
                phase: "D".to_string(),
                class: "VII".to_string(),
                academic_year: "2024/2025".to_string(),
            },
            standards: vec![CurriculumStandard {
                id: "cp-1".to_string(),
                text: "Peserta didik mampu mengidentifikasi interaksi antar makhluk hidup dan lingkungannya.".to_string(),
            }],
        }
    }

    /// Drops blank standards and checks what remains.
    ///
    /// Standards without an id get `cp-<n>` by their position after filtering.
    pub fn validate(self) -> Result<Self> {
        let info = validate_info(self.info)?;

        let standards: Vec<CurriculumStandard> = self
            .standards
            .into_iter()
            .map(|cp| CurriculumStandard { id: cp.id.trim().to_string(), text: cp.text.trim().to_string() })
            .filter(|cp| !cp.text.is_empty())
            .enumerate()
            .map(|(i, mut cp)| {
                if cp.id.is_empty() {
                    cp.id = format!("cp-{}", i + 1);
                }
                cp
            })
            .collect();

        if standards.is_empty() {
            return Err(PlannerError::InvalidInput("at least one curriculum standard is required".to_string()));
        }
        if standards.len() > MAX_STANDARDS {
            return Err(PlannerError::InvalidInput(format!(
                "at most {MAX_STANDARDS} curriculum standards are allowed, got {}",
                standards.len()
            )));
        }

        debug!(standards = standards.len(), "Session input validated");
        Ok(Self { info, standards })
    }
}

/// Trims every field, then checks none is empty and the phase is known.
fn validate_info(info: SessionInfo) -> Result<SessionInfo> {
    let info = SessionInfo {
        school_name: info.school_name.trim().to_string(),
        teacher_name: info.teacher_name.trim().to_string(),
        subject: info.subject.trim().to_string(),
        phase: info.phase.trim().to_string(),
        class: info.class.trim().to_string(),
        academic_year: info.academic_year.trim().to_string(),
    };

    let fields = [
        ("namaMadrasah", &info.school_name),
        ("namaGuru", &info.teacher_name),
        ("mataPelajaran", &info.subject),
        ("fase", &info.phase),
        ("kelas", &info.class),
        ("tahunPelajaran", &info.academic_year),
    ];
    let missing: Vec<&str> = fields.iter().filter(|(_, v)| v.is_empty()).map(|(name, _)| *name).collect();
    if !missing.is_empty() {
        return Err(PlannerError::InvalidInput(format!("missing session info: {}", missing.join(", "))));
    }

    if !PHASES.iter().any(|(code, _)| *code == info.phase) {
        return Err(PlannerError::InvalidInput(format!("unknown phase '{}' (expected A-F)", info.phase)));
    }
    Ok(info)
}

/// Concatenates per-standard batches in input order.
pub fn flatten_objectives(batches: Vec<Vec<ObjectiveRecord>>) -> Vec<ObjectiveRecord> {
    batches.into_iter().flatten().collect()
}

/// Picks an objective by 1-based position in the flattened list, or by exact text.
pub fn find_objective<'a>(objectives: &'a [ObjectiveRecord], selector: &str) -> Result<&'a ObjectiveRecord> {
    objective_position(objectives, selector).map(|i| &objectives[i])
}

/// Zero-based index of the objective `selector` names.
pub fn objective_position(objectives: &[ObjectiveRecord], selector: &str) -> Result<usize> {
    let selector = selector.trim();

    if let Ok(position) = selector.parse::<usize>() {
        return position
            .checked_sub(1)
            .filter(|i| *i < objectives.len())
            .ok_or_else(|| {
                PlannerError::ObjectiveNotFound(format!(
                    "#{position} (have {} objectives)",
                    objectives.len()
                ))
            });
    }

    objectives
        .iter()
        .position(|o| o.objective == selector)
        .ok_or_else(|| PlannerError::ObjectiveNotFound(selector.to_string()))
}

/// Sequence entries written for `objective`, in sequence order.
pub fn relevant_sequences(sequence: &[SequenceRecord], objective: &ObjectiveRecord) -> Vec<SequenceRecord> {
    sequence.iter().filter(|s| s.entry.objective == objective.objective).cloned().collect()
}
