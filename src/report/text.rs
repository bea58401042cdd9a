use crate::batch::{BatchEntry, BatchOutcome};
use crate::engine::settings::RequiredDocuments;
use crate::engine::Evaluation;
use crate::types::assessment::Assessment;
use crate::types::scoring::{CategoryGap, ScoringTrace};

pub fn evaluation_to_text(evaluation: &Evaluation, explain: bool) -> String {
    let mut output = assessment_to_text(&evaluation.assessment);
    if explain {
        output.push('\n');
        output.push_str(&trace_to_text(&evaluation.trace));
    }
    output
}

pub fn assessment_to_text(assessment: &Assessment) -> String {
    let mut output = String::new();
    output.push_str("Visa Application Analysis Results:\n");
    output.push_str("==================================\n");
    output.push_str(&format!("Status: {}\n", assessment.status()));
    output.push_str(&format!(
        "Approval Probability: {:?}%\n",
        assessment.probability()
    ));

    match assessment {
        Assessment::Complete {
            risk_score,
            recommendations,
            ..
        } => {
            output.push_str(&format!("Risk Score: {risk_score:?}%\n"));
            if !recommendations.is_empty() {
                output.push_str("\nRecommendations:\n");
                for recommendation in recommendations {
                    output.push_str(&format!("- {recommendation}\n"));
                }
            }
        }
        Assessment::Incomplete {
            missing_documents, ..
        } => {
            output.push_str("\nMissing Documents:\n");
            for field in missing_documents {
                output.push_str(&format!("- {field}\n"));
            }
        }
    }

    output
}

fn trace_to_text(trace: &ScoringTrace) -> String {
    let mut output = String::from("Scoring Trace:\n");
    match trace {
        ScoringTrace::DocumentsIncomplete { gaps } => {
            output.push_str(&gaps_to_text(gaps));
        }
        ScoringTrace::Scored {
            features,
            indicators,
            risk_score,
            base_probability,
            adjustments,
            final_probability,
        } => {
            output.push_str(&format!(
                "- features: age={} income={} travel_history_count={} bank_balance={} employment_duration={} previous_visa_rejections={}\n",
                features.age,
                features.income,
                features.travel_history_count,
                features.bank_balance,
                features.employment_duration,
                features.previous_visa_rejections
            ));
            for indicator in indicators {
                output.push_str(&format!(
                    "- risk {}: {}\n",
                    indicator.kind.as_str(),
                    if indicator.triggered { "triggered" } else { "clear" }
                ));
            }
            output.push_str(&format!("- risk score: {risk_score:.4}\n"));
            output.push_str(&format!("- base probability: {base_probability:.4}\n"));
            if adjustments.is_empty() {
                output.push_str("- adjustments: none\n");
            }
            for adjustment in adjustments {
                output.push_str(&format!(
                    "- adjustment {}: {:+.2}\n",
                    adjustment.kind.as_str(),
                    adjustment.delta
                ));
            }
            output.push_str(&format!("- final probability: {final_probability:.4}\n"));
        }
    }
    output
}

pub fn gaps_to_text(gaps: &[CategoryGap]) -> String {
    if gaps.is_empty() {
        return "documents: all required fields present\n".to_string();
    }
    let mut output = String::new();
    for gap in gaps {
        output.push_str(&format!(
            "- {} ({}): {}\n",
            gap.category,
            if gap.category_present {
                "incomplete"
            } else {
                "category missing"
            },
            gap.missing_fields.join(", ")
        ));
    }
    output
}

pub fn requirements_to_text(required: &RequiredDocuments) -> String {
    let mut output = String::from("Required documents:\n");
    for category in required.categories() {
        output.push_str(&format!(
            "- {}: {}\n",
            category.category,
            category.fields.join(", ")
        ));
    }
    output
}

pub fn batch_to_text(entries: &[BatchEntry]) -> String {
    if entries.is_empty() {
        return "batch: no application files found\n".to_string();
    }
    let mut output = String::new();
    for entry in entries {
        let line = match &entry.outcome {
            BatchOutcome::Scored(evaluation) => match &evaluation.assessment {
                Assessment::Complete {
                    probability,
                    risk_score,
                    recommendations,
                } => format!(
                    "[complete] {}: probability {:?}%, risk {:?}%, {} recommendation(s)",
                    entry.path.display(),
                    probability,
                    risk_score,
                    recommendations.len()
                ),
                Assessment::Incomplete {
                    missing_documents, ..
                } => format!(
                    "[incomplete] {}: missing {}",
                    entry.path.display(),
                    missing_documents.join(", ")
                ),
            },
            BatchOutcome::Failed(reason) => {
                format!("[error] {}: {}", entry.path.display(), reason)
            }
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}
