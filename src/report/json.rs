use crate::batch::{BatchEntry, BatchOutcome};
use crate::engine::settings::RequiredDocuments;
use crate::engine::Evaluation;
use crate::types::scoring::CategoryGap;
use serde_json::json;

/// The result record verbatim, or `{"result", "trace"}` when explaining.
pub fn evaluation_to_json(evaluation: &Evaluation, explain: bool) -> Result<String, serde_json::Error> {
    if explain {
        serde_json::to_string_pretty(&json!({
            "result": evaluation.assessment,
            "trace": evaluation.trace,
        }))
    } else {
        serde_json::to_string_pretty(&evaluation.assessment)
    }
}

pub fn batch_to_json(entries: &[BatchEntry]) -> Result<String, serde_json::Error> {
    let rows: Vec<_> = entries
        .iter()
        .map(|entry| match &entry.outcome {
            BatchOutcome::Scored(evaluation) => json!({
                "file": entry.path.display().to_string(),
                "result": evaluation.assessment,
            }),
            BatchOutcome::Failed(reason) => json!({
                "file": entry.path.display().to_string(),
                "error": reason,
            }),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

pub fn gaps_to_json(gaps: &[CategoryGap]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "complete": gaps.is_empty(),
        "gaps": gaps,
    }))
}

pub fn requirements_to_json(required: &RequiredDocuments) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(required.categories())
}
