use super::LessonPlanner;
use crate::constants::OBJECTIVES_PER_STANDARD;
use crate::error::{PlannerError, Result, Stage};
use crate::prompt::objectives_prompt;
use crate::records::{CurriculumStandard, ObjectiveDraft, ObjectiveRecord, SessionInfo};
use crate::schema::objectives_schema;
use tracing::{Instrument, info, info_span, warn};

impl LessonPlanner {
    /// Stage 1: one batch of objectives per standard, requested in order.
    ///
    /// Stops at the first failing standard; the error names it.
    pub async fn expand_objectives(
        &self,
        info: &SessionInfo,
        standards: &[CurriculumStandard],
    ) -> Result<Vec<Vec<ObjectiveRecord>>> {
        if standards.is_empty() {
            return Err(PlannerError::InvalidInput("no curriculum standards to expand".to_string()));
        }

        let mut batches = Vec::with_capacity(standards.len());
        for standard in standards {
            let span = info_span!("objectives", standard = %standard.id);
            let batch = self
                .objectives_for_standard(info, &standard.text)
                .instrument(span)
                .await
                .map_err(|e| PlannerError::StandardFailed {
                    stage: Stage::Objectives,
                    standard: standard.text.clone(),
                    source: Box::new(e),
                })?;
            batches.push(batch);
        }

        info!(
            standards = batches.len(),
            objectives = batches.iter().map(Vec::len).sum::<usize>(),
            "Objectives generated"
        );
        Ok(batches)
    }

    /// Stage 1 for a single standard.
    pub async fn objectives_for_standard(&self, info: &SessionInfo, standard: &str) -> Result<Vec<ObjectiveRecord>> {
        let prompt = objectives_prompt(info, standard);
        let drafts: Vec<ObjectiveDraft> = self.request(Stage::Objectives, &prompt, &objectives_schema()).await?;

        if drafts.len() != OBJECTIVES_PER_STANDARD {
            warn!(expected = OBJECTIVES_PER_STANDARD, actual = drafts.len(), "Unexpected objective count");
        }

        Ok(drafts
            .into_iter()
            .zip(1..)
            .map(|(draft, no)| ObjectiveRecord::from_draft(no, standard, draft))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::scripted::ScriptedModel;
    use super::*;
    use crate::session::{SessionInput, flatten_objectives};
    use rencana_abstraction::{ModelError, ResponseFormat};
    use rencana_models::MockModel;
    use serde_json::json;
    use std::sync::Arc;

    fn standards(texts: &[&str]) -> Vec<CurriculumStandard> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| CurriculumStandard { id: format!("cp-{}", i + 1), text: (*t).to_string() })
            .collect()
    }

    fn batch(prefix: &str) -> String {
        let items: Vec<_> = (1..=2)
            .map(|i| {
                json!({
                    "kontenPembelajaran": format!("{prefix} konten {i}"),
                    "kompetensi": "Menganalisis",
                    "materiPokok": format!("{prefix} materi {i}"),
                    "tujuanPembelajaran": format!("{prefix} tujuan {i}")
                })
            })
            .collect();
        serde_json::to_string(&items).unwrap()
    }

    #[tokio::test]
    async fn test_expand_numbers_within_each_standard() {
        let model = Arc::new(ScriptedModel::replying(&[&batch("A"), &format!("```json\n{}\n```", batch("B"))]));
        let planner = LessonPlanner::new(model.clone());
        let info = SessionInput::template().info;

        let batches = planner.expand_objectives(&info, &standards(&["CP satu", "CP dua"])).await.unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1][0].no, 1);
        assert_eq!(batches[1][1].no, 2);
        assert_eq!(batches[1][1].standard, "CP dua");
        assert_eq!(batches[0][0].objective, "A tujuan 1");

        let flat = flatten_objectives(batches);
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[2].objective, "B tujuan 1");

        let prompts = model.prompts();
        assert!(prompts[0].contains("CP satu"));
        assert!(prompts[1].contains("CP dua"));
    }

    #[tokio::test]
    async fn test_expand_sends_stage_schema() {
        let model = Arc::new(ScriptedModel::replying(&[&batch("A")]));
        let planner = LessonPlanner::new(model.clone()).with_temperature(Some(0.2));
        let info = SessionInput::template().info;

        planner.expand_objectives(&info, &standards(&["CP"])).await.unwrap();

        let params = model.params.lock().unwrap()[0].clone().unwrap();
        assert_eq!(params.temperature, Some(0.2));
        match params.response_format {
            Some(ResponseFormat::JsonSchema(raw)) => assert!(raw.contains("kontenPembelajaran")),
            other => panic!("expected schema, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_default_planner_sends_no_temperature() {
        let model = Arc::new(ScriptedModel::replying(&[&batch("A")]));
        let planner = LessonPlanner::new(model.clone());

        planner.expand_objectives(&SessionInput::template().info, &standards(&["CP"])).await.unwrap();

        let params = model.params.lock().unwrap()[0].clone().unwrap();
        assert_eq!(params.temperature, None);
        assert!(params.response_format.is_some());
    }

    #[tokio::test]
    async fn test_failure_names_standard_and_stops() {
        let model = Arc::new(ScriptedModel::new(vec![
            Ok(batch("A")),
            Err(ModelError::RequestError("connection reset".to_string())),
            Ok(batch("C")),
        ]));
        let planner = LessonPlanner::new(model.clone());
        let info = SessionInput::template().info;

        let err = planner
            .expand_objectives(&info, &standards(&["CP satu", "CP dua", "CP tiga"]))
            .await
            .unwrap_err();

        match &err {
            PlannerError::StandardFailed { standard, .. } => assert_eq!(standard, "CP dua"),
            other => panic!("expected StandardFailed, got {other:?}"),
        }
        assert!(err.to_string().contains("connection reset"));
        assert_eq!(model.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_reply_is_reported() {
        let model = Arc::new(ScriptedModel::replying(&["[{\"kompetensi\": \"x\"}]"]));
        let planner = LessonPlanner::new(model);
        let err = planner
            .objectives_for_standard(&SessionInput::template().info, "CP")
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::MalformedResponse { stage: Stage::Objectives, .. }));
    }

    #[tokio::test]
    async fn test_empty_standards_rejected_without_request() {
        let model = Arc::new(ScriptedModel::replying(&[]));
        let planner = LessonPlanner::new(model.clone());
        let err = planner.expand_objectives(&SessionInput::template().info, &[]).await.unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_mock_model_yields_six_per_standard() {
        let planner = LessonPlanner::new(Arc::new(MockModel::new("mock".to_string())));
        let batches = planner
            .expand_objectives(&SessionInput::template().info, &standards(&["CP satu", "CP dua"]))
            .await
            .unwrap();
        assert!(batches.iter().all(|b| b.len() == OBJECTIVES_PER_STANDARD));
        assert_eq!(batches[1][5].no, 6);
    }
}
