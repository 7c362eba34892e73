use super::LessonPlanner;
use crate::constants::{DEEP_LEARNING_APPROACH, UNSPECIFIED_TIME};
use crate::error::{PlannerError, Result, Stage};
use crate::prompt::{PlanContext, plan_prompt};
use crate::records::{LessonPlanDocument, ObjectiveRecord, SequenceRecord, SessionInfo};
use crate::schema::plan_schema;
use crate::session::{find_objective, relevant_sequences};
use tracing::{Instrument, info, info_span};

impl LessonPlanner {
    /// Stage 3: one lesson plan for `objective`.
    ///
    /// `relevant` are the sequence entries written for this objective; the
    /// first one supplies values, dimensions and time allocation.
    pub async fn synthesize_plan(
        &self,
        info: &SessionInfo,
        objective: &ObjectiveRecord,
        relevant: &[SequenceRecord],
    ) -> Result<LessonPlanDocument> {
        let ctx = PlanContext::resolve(objective, relevant, UNSPECIFIED_TIME);
        let prompt = plan_prompt(info, &ctx);
        let span = info_span!("plan", objective = objective.no);

        let mut plan: LessonPlanDocument =
            self.request(Stage::Plan, &prompt, &plan_schema()).instrument(span).await?;

        plan.design.deep_learning_approach = DEEP_LEARNING_APPROACH.to_string();
        plan.identity.time_allocation = ctx.time_allocation;

        info!(
            objective = %objective.objective,
            total_minutes = plan.experience.steps.total_minutes(),
            "Lesson plan generated"
        );
        Ok(plan)
    }

    /// Resolves `selector` against the objective list and plans it.
    ///
    /// Fails before any request when the objective is unknown or no sequence
    /// entry refers to it.
    pub async fn plan_for(
        &self,
        info: &SessionInfo,
        objectives: &[ObjectiveRecord],
        sequence: &[SequenceRecord],
        selector: &str,
    ) -> Result<LessonPlanDocument> {
        let objective = find_objective(objectives, selector)?;
        let relevant = relevant_sequences(sequence, objective);
        if relevant.is_empty() {
            return Err(PlannerError::NoSequenceForObjective(objective.objective.clone()));
        }
        self.synthesize_plan(info, objective, &relevant).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::scripted::ScriptedModel;
    use super::*;
    use crate::records::SequenceDraft;
    use crate::session::SessionInput;
    use crate::vocab::{CharacterValue, ProfileDimension};
    use pretty_assertions::assert_eq;
    use rencana_models::MockModel;
    use serde_json::json;
    use std::sync::Arc;

    fn objective(no: u32, text: &str) -> ObjectiveRecord {
        ObjectiveRecord {
            no,
            standard: "Memahami ekosistem".to_string(),
            content: "Ekosistem".to_string(),
            competency: "Menganalisis".to_string(),
            topic: "Rantai makanan".to_string(),
            objective: text.to_string(),
        }
    }

    fn entry(no: u32, text: &str, time: &str) -> SequenceRecord {
        SequenceRecord {
            no,
            entry: SequenceDraft {
                objective: text.to_string(),
                indicator: "Menyusun".to_string(),
                topic: "Rantai makanan".to_string(),
                values: vec![CharacterValue::LoveOfNature],
                time_allocation: time.to_string(),
                dimensions: vec![ProfileDimension::CriticalReasoning],
                assessment: "Kuis".to_string(),
                resources: "Buku".to_string(),
            },
        }
    }

    fn plan_reply() -> String {
        json!({
            "identitas": {
                "namaMadrasah": "MTs", "namaGuru": "Guru", "mataPelajaran": "IPA", "fase": "D",
                "semester": "Ganjil", "alokasiWaktu": "model wrote this",
                "materiPelajaran": "Materi", "dimensiProfilLulusan": ["Kolaborasi"], "pokokMateri": "Rantai makanan"
            },
            "desainPembelajaran": {
                "capaianPembelajaran": ["CP"], "lintasDisiplinIlmu": ["Matematika"], "tujuanPembelajaran": ["TP"],
                "praktikPedagogis": {"model": ["Project Based Learning"], "strategi": [], "metode": []},
                "kemitraanPembelajaran": {"guruLain": "Guru IPS"},
                "lingkunganPembelajaran": {"fisik": "Kelas", "virtual": "LMS", "budayaBelajar": "Kolaboratif"},
                "pemanfaatanDigital": "Video",
                "deepLearningApproach": "model text"
            },
            "pengalamanBelajar": {
                "mindfulMeaningfulJoyful": {"berkesadaran": "a", "bermakna": "b", "menggembirakan": "c"},
                "langkahPembelajaran": {
                    "kegiatanAwal": {"description": "Salam", "alokasiWaktuMenit": 10},
                    "kegiatanInti": {"description": "Diskusi", "alokasiWaktuMenit": 70},
                    "kegiatanPenutup": {"description": "Refleksi", "alokasiWaktuMenit": 10}
                }
            },
            "asesmenPembelajaran": {"asesmenAwal": "x", "asesmenProses": "y", "asesmenAkhir": "z"},
            "lampiran": {
                "lkpd": {"judul": "LKPD", "instruksi": "Isi", "tabel": [{"header": "Nama", "type": "text"}]},
                "instrumenPenilaian": {"kognitif": "k", "sikap": "s", "presentasi": "p"}
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_plan_overwrites_fixed_fields() {
        let model = Arc::new(ScriptedModel::replying(&[&format!("```json\n{}\n```", plan_reply())]));
        let planner = LessonPlanner::new(model.clone());
        let info = SessionInput::template().info;
        let obj = objective(1, "Menyusun rantai makanan");

        let plan = planner
            .synthesize_plan(&info, &obj, &[entry(1, &obj.objective, "4 JP"), entry(5, &obj.objective, "8 JP")])
            .await
            .unwrap();

        assert_eq!(plan.identity.time_allocation, "4 JP");
        assert_eq!(plan.design.deep_learning_approach, DEEP_LEARNING_APPROACH);
        assert_eq!(plan.design.partnerships.other_teacher.as_deref(), Some("Guru IPS"));
        assert!(plan.design.partnerships.librarian.is_none());
        assert!((plan.experience.steps.total_minutes() - 90.0).abs() < f64::EPSILON);

        let prompt = &model.prompts()[0];
        assert!(prompt.contains("Alokasi Waktu: 4 JP"));
        assert!(prompt.contains("Cinta Alam"));
    }

    #[tokio::test]
    async fn test_plan_without_entries_uses_unspecified_time() {
        let model = Arc::new(ScriptedModel::replying(&[&plan_reply()]));
        let planner = LessonPlanner::new(model);
        let obj = objective(1, "Menyusun rantai makanan");

        let plan = planner.synthesize_plan(&SessionInput::template().info, &obj, &[]).await.unwrap();
        assert_eq!(plan.identity.time_allocation, UNSPECIFIED_TIME);
    }

    #[tokio::test]
    async fn test_plan_for_resolves_selector() {
        let model = Arc::new(ScriptedModel::replying(&[&plan_reply()]));
        let planner = LessonPlanner::new(model.clone());
        let objectives = vec![objective(1, "satu"), objective(2, "dua")];
        let sequence = vec![entry(1, "satu", "2 JP"), entry(2, "dua", "3 JP")];

        let plan = planner
            .plan_for(&SessionInput::template().info, &objectives, &sequence, "2")
            .await
            .unwrap();
        assert_eq!(plan.identity.time_allocation, "3 JP");
        assert!(model.prompts()[0].contains("- dua"));
    }

    #[tokio::test]
    async fn test_plan_for_errors_before_request() {
        let model = Arc::new(ScriptedModel::replying(&[]));
        let planner = LessonPlanner::new(model.clone());
        let info = SessionInput::template().info;
        let objectives = vec![objective(1, "satu"), objective(2, "dua")];
        let sequence = vec![entry(1, "satu", "2 JP")];

        let err = planner.plan_for(&info, &objectives, &sequence, "tiga").await.unwrap_err();
        assert!(matches!(err, PlannerError::ObjectiveNotFound(_)));

        let err = planner.plan_for(&info, &objectives, &sequence, "dua").await.unwrap_err();
        assert!(matches!(err, PlannerError::NoSequenceForObjective(ref text) if text == "dua"));

        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_mock_plan_decodes() {
        let planner = LessonPlanner::new(Arc::new(MockModel::new("mock".to_string())));
        let obj = objective(1, "satu");
        let plan = planner
            .synthesize_plan(&SessionInput::template().info, &obj, &[entry(1, "satu", "2 JP")])
            .await
            .unwrap();
        assert_eq!(plan.appendix.worksheet.columns.len(), 1);
        assert_eq!(plan.identity.time_allocation, "2 JP");
    }
}
