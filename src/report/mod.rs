pub mod json;
pub mod text;

use crate::batch::BatchEntry;
use crate::engine::settings::RequiredDocuments;
use crate::engine::Evaluation;
use crate::error::VisaScoreError;
use crate::types::scoring::CategoryGap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_evaluation(
    evaluation: &Evaluation,
    format: OutputFormat,
    explain: bool,
) -> Result<String, VisaScoreError> {
    match format {
        OutputFormat::Json => {
            json::evaluation_to_json(evaluation, explain).map_err(VisaScoreError::Json)
        }
        OutputFormat::Text => Ok(text::evaluation_to_text(evaluation, explain)),
    }
}

pub fn render_batch(entries: &[BatchEntry], format: OutputFormat) -> Result<String, VisaScoreError> {
    match format {
        OutputFormat::Json => json::batch_to_json(entries).map_err(VisaScoreError::Json),
        OutputFormat::Text => Ok(text::batch_to_text(entries)),
    }
}

pub fn render_gaps(gaps: &[CategoryGap], format: OutputFormat) -> Result<String, VisaScoreError> {
    match format {
        OutputFormat::Json => json::gaps_to_json(gaps).map_err(VisaScoreError::Json),
        OutputFormat::Text => Ok(text::gaps_to_text(gaps)),
    }
}

pub fn render_requirements(
    required: &RequiredDocuments,
    format: OutputFormat,
) -> Result<String, VisaScoreError> {
    match format {
        OutputFormat::Json => json::requirements_to_json(required).map_err(VisaScoreError::Json),
        OutputFormat::Text => Ok(text::requirements_to_text(required)),
    }
}
