//! Records exchanged between the stages.
//!
//! Field names on the wire are the camelCase keys the prompts ask for. Each
//! stage's `*Draft` type is exactly what the model returns; the pipeline turns
//! drafts into numbered records.

use crate::vocab::{
    CharacterValue, LearningModel, LearningStrategy, ProfileDimension, TeachingMethod,
    WorksheetFieldType,
};
use serde::{Deserialize, Serialize};

/// Who is teaching what, where. Feeds every prompt and document header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "namaMadrasah")]
    pub school_name: String,
    #[serde(rename = "namaGuru")]
    pub teacher_name: String,
    #[serde(rename = "mataPelajaran")]
    pub subject: String,
    /// Curriculum phase, A through F.
    #[serde(rename = "fase")]
    pub phase: String,
    #[serde(rename = "kelas")]
    pub class: String,
    /// e.g. "2024/2025".
    #[serde(rename = "tahunPelajaran")]
    pub academic_year: String,
}

/// An official learning-outcome statement supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumStandard {
    #[serde(default)]
    pub id: String,
    pub text: String,
}

/// One learning objective as returned by Stage 1, before numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveDraft {
    #[serde(rename = "kontenPembelajaran")]
    pub content: String,
    #[serde(rename = "kompetensi")]
    pub competency: String,
    #[serde(rename = "materiPokok")]
    pub topic: String,
    #[serde(rename = "tujuanPembelajaran")]
    pub objective: String,
}

/// A learning objective (TP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveRecord {
    /// 1-based position within its parent standard's batch.
    pub no: u32,
    #[serde(rename = "capaianPembelajaran")]
    pub standard: String,
    #[serde(rename = "kontenPembelajaran")]
    pub content: String,
    #[serde(rename = "kompetensi")]
    pub competency: String,
    #[serde(rename = "materiPokok")]
    pub topic: String,
    #[serde(rename = "tujuanPembelajaran")]
    pub objective: String,
}

impl ObjectiveRecord {
    pub(crate) fn from_draft(no: u32, standard: &str, draft: ObjectiveDraft) -> Self {
        Self {
            no,
            standard: standard.to_string(),
            content: draft.content,
            competency: draft.competency,
            topic: draft.topic,
            objective: draft.objective,
        }
    }
}

/// One learning-sequence entry as returned by Stage 2, before numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDraft {
    #[serde(rename = "tujuanPembelajaran")]
    pub objective: String,
    #[serde(rename = "indikator")]
    pub indicator: String,
    #[serde(rename = "materiPokok")]
    pub topic: String,
    #[serde(rename = "nilaiKBC")]
    pub values: Vec<CharacterValue>,
    #[serde(rename = "alokasiWaktu")]
    pub time_allocation: String,
    #[serde(rename = "dimensiProfilLulusan")]
    pub dimensions: Vec<ProfileDimension>,
    #[serde(rename = "asesmen")]
    pub assessment: String,
    #[serde(rename = "sumberBelajar")]
    pub resources: String,
}

/// A learning-sequence entry (ATP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// 1-based position in the whole sequence.
    pub no: u32,
    #[serde(flatten)]
    pub entry: SequenceDraft,
}

/// The full lesson plan (PPM).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlanDocument {
    #[serde(rename = "identitas")]
    pub identity: PlanIdentity,
    #[serde(rename = "desainPembelajaran")]
    pub design: PlanDesign,
    #[serde(rename = "pengalamanBelajar")]
    pub experience: LearningExperience,
    #[serde(rename = "asesmenPembelajaran")]
    pub assessment: PlanAssessment,
    #[serde(rename = "lampiran")]
    pub appendix: PlanAppendix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanIdentity {
    #[serde(rename = "namaMadrasah")]
    pub school_name: String,
    #[serde(rename = "namaGuru")]
    pub teacher_name: String,
    #[serde(rename = "mataPelajaran")]
    pub subject: String,
    #[serde(rename = "fase")]
    pub phase: String,
    pub semester: String,
    #[serde(rename = "alokasiWaktu")]
    pub time_allocation: String,
    /// Subject-matter description woven with the character values.
    #[serde(rename = "materiPelajaran")]
    pub subject_matter: String,
    #[serde(rename = "dimensiProfilLulusan")]
    pub dimensions: Vec<ProfileDimension>,
    #[serde(rename = "pokokMateri")]
    pub core_topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDesign {
    #[serde(rename = "capaianPembelajaran")]
    pub standards: Vec<String>,
    #[serde(rename = "lintasDisiplinIlmu")]
    pub cross_disciplinary: Vec<String>,
    #[serde(rename = "tujuanPembelajaran")]
    pub objectives: Vec<String>,
    #[serde(rename = "praktikPedagogis")]
    pub pedagogy: PedagogicalPractice,
    #[serde(rename = "kemitraanPembelajaran", default)]
    pub partnerships: LearningPartnerships,
    #[serde(rename = "lingkunganPembelajaran")]
    pub environment: LearningEnvironment,
    #[serde(rename = "pemanfaatanDigital")]
    pub digital_use: String,
    #[serde(rename = "deepLearningApproach", default)]
    pub deep_learning_approach: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedagogicalPractice {
    pub model: Vec<LearningModel>,
    #[serde(rename = "strategi")]
    pub strategy: Vec<LearningStrategy>,
    #[serde(rename = "metode")]
    pub method: Vec<TeachingMethod>,
}

/// Collaboration partners. Each is optional; the model decides which apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPartnerships {
    #[serde(rename = "pustakawan", default, skip_serializing_if = "Option::is_none")]
    pub librarian: Option<String>,
    #[serde(rename = "laboranSekolah", default, skip_serializing_if = "Option::is_none")]
    pub lab_assistant: Option<String>,
    #[serde(rename = "guruLain", default, skip_serializing_if = "Option::is_none")]
    pub other_teacher: Option<String>,
    #[serde(rename = "pihakLuarSekolah", default, skip_serializing_if = "Option::is_none")]
    pub external_party: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningEnvironment {
    #[serde(rename = "fisik")]
    pub physical: String,
    pub r#virtual: String,
    #[serde(rename = "budayaBelajar")]
    pub culture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningExperience {
    #[serde(rename = "mindfulMeaningfulJoyful")]
    pub principles: ExperiencePrinciples,
    #[serde(rename = "langkahPembelajaran")]
    pub steps: LearningSteps,
}

/// Mindful, meaningful and joyful activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperiencePrinciples {
    #[serde(rename = "berkesadaran")]
    pub mindful: String,
    #[serde(rename = "bermakna")]
    pub meaningful: String,
    #[serde(rename = "menggembirakan")]
    pub joyful: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSteps {
    #[serde(rename = "kegiatanAwal")]
    pub opening: TimedActivity,
    #[serde(rename = "kegiatanInti")]
    pub core: TimedActivity,
    #[serde(rename = "kegiatanPenutup")]
    pub closing: TimedActivity,
}

impl LearningSteps {
    /// Sum of the three activities' minutes.
    pub fn total_minutes(&self) -> f64 {
        self.opening.minutes + self.core.minutes + self.closing.minutes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedActivity {
    pub description: String,
    #[serde(rename = "alokasiWaktuMenit")]
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAssessment {
    #[serde(rename = "asesmenAwal")]
    pub initial: String,
    #[serde(rename = "asesmenProses")]
    pub process: String,
    #[serde(rename = "asesmenAkhir")]
    pub summative: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAppendix {
    #[serde(rename = "lkpd")]
    pub worksheet: Worksheet,
    #[serde(rename = "instrumenPenilaian")]
    pub rubric: AssessmentRubric,
}

/// Student worksheet (LKPD).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "instruksi")]
    pub instructions: String,
    #[serde(rename = "tabel")]
    pub columns: Vec<WorksheetColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetColumn {
    pub header: String,
    #[serde(rename = "type")]
    pub kind: WorksheetFieldType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRubric {
    #[serde(rename = "kognitif")]
    pub cognitive: String,
    #[serde(rename = "sikap")]
    pub attitude: String,
    #[serde(rename = "presentasi")]
    pub presentation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_record_flattens_entry_fields() {
        let json = r#"{
            "no": 2,
            "tujuanPembelajaran": "Menjelaskan siklus air",
            "indikator": "Menyebutkan tahap evaporasi",
            "materiPokok": "Siklus air",
            "nilaiKBC": ["Cinta Alam", "Cinta Ilmu"],
            "alokasiWaktu": "2 Jam Pelajaran",
            "dimensiProfilLulusan": ["Penalaran Kritis"],
            "asesmen": "Tes tertulis",
            "sumberBelajar": "Buku siswa"
        }"#;

        let record: SequenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.no, 2);
        assert_eq!(record.entry.values, vec![CharacterValue::LoveOfNature, CharacterValue::LoveOfKnowledge]);
        assert_eq!(record.entry.dimensions, vec![ProfileDimension::CriticalReasoning]);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["alokasiWaktu"], "2 Jam Pelajaran");
        assert!(back.get("entry").is_none());
    }

    #[test]
    fn test_partnerships_default_when_absent() {
        let partners: LearningPartnerships = serde_json::from_str(r#"{"guruLain": "IPS"}"#).unwrap();
        assert_eq!(partners.other_teacher.as_deref(), Some("IPS"));
        assert!(partners.librarian.is_none());
        assert_eq!(serde_json::to_string(&partners).unwrap(), r#"{"guruLain":"IPS"}"#);
    }

    #[test]
    fn test_session_info_uses_wire_keys() {
        let info = SessionInfo { subject: "IPA".to_string(), ..Default::default() };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["mataPelajaran"], "IPA");
        assert!(value.get("subject").is_none());
    }
}
