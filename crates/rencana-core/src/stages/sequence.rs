use super::LessonPlanner;
use crate::error::{PlannerError, Result, Stage};
use crate::prompt::sequence_prompt;
use crate::records::{ObjectiveRecord, SequenceDraft, SequenceRecord};
use crate::schema::sequence_schema;
use tracing::{Instrument, info, info_span, warn};

impl LessonPlanner {
    /// Stage 2: a single request covering every objective.
    pub async fn synthesize_sequence(&self, objectives: &[ObjectiveRecord]) -> Result<Vec<SequenceRecord>> {
        if objectives.is_empty() {
            return Err(PlannerError::InvalidInput(
                "no learning objectives; generate objectives first".to_string(),
            ));
        }

        let texts: Vec<&str> = objectives.iter().map(|o| o.objective.as_str()).collect();
        let prompt = sequence_prompt(objectives);
        let span = info_span!("sequence", objectives = objectives.len());
        let drafts: Vec<SequenceDraft> = self
            .request(Stage::Sequence, &prompt, &sequence_schema(&texts))
            .instrument(span)
            .await?;

        if drafts.len() != objectives.len() {
            warn!(expected = objectives.len(), actual = drafts.len(), "Sequence length differs from objectives");
        }

        let records: Vec<SequenceRecord> =
            drafts.into_iter().zip(1..).map(|(entry, no)| SequenceRecord { no, entry }).collect();
        info!(entries = records.len(), "Learning sequence generated");
        Ok(records)
    }
}
