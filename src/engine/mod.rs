pub mod adjustments;
pub mod documents;
pub mod features;
pub mod recommendations;
pub mod risk;
pub mod settings;

use crate::types::application::ApplicationRecord;
use crate::types::assessment::Assessment;
use crate::types::scoring::{Probability, ScoringTrace};
use settings::EngineSettings;
use tracing::debug;

pub use adjustments::calculate_adjustments;
pub use documents::validate_documents;
pub use features::extract_features;
pub use recommendations::generate_recommendations;
pub use risk::calculate_risk_score;

/// Assessment together with the trace that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub assessment: Assessment,
    pub trace: ScoringTrace,
}

impl Evaluation {
    /// Whether the clamped, unrounded probability fell below `threshold`.
    /// Incomplete submissions are never scored, so they never fall below it.
    pub fn falls_below(&self, threshold: Probability) -> bool {
        match &self.trace {
            ScoringTrace::Scored {
                final_probability, ..
            } => *final_probability < threshold,
            ScoringTrace::DocumentsIncomplete { .. } => false,
        }
    }
}

/// Stateless scorer over an immutable settings table; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    settings: EngineSettings,
}

impl ScoringEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn predict_approval_probability(&self, record: &ApplicationRecord) -> Assessment {
        self.evaluate(record).assessment
    }

    pub fn explain(&self, record: &ApplicationRecord) -> ScoringTrace {
        self.evaluate(record).trace
    }

    pub fn evaluate(&self, record: &ApplicationRecord) -> Evaluation {
        let gaps = documents::document_gaps(&self.settings.required_documents, &record.documents);
        if !gaps.is_empty() {
            let missing = gaps
                .iter()
                .flat_map(|gap| gap.missing_fields.iter().cloned())
                .collect::<Vec<_>>();
            debug!(missing = missing.len(), "required documents incomplete");
            return Evaluation {
                assessment: Assessment::incomplete(missing),
                trace: ScoringTrace::DocumentsIncomplete { gaps },
            };
        }

        let features = extract_features(record);
        let indicators = risk::risk_indicators(&features, &self.settings.risk);
        let risk_score = risk::risk_score_from(&indicators);
        let base_probability = 1.0 - risk_score;

        let applied = adjustments::applied_adjustments(record, &self.settings.adjustments);
        let final_probability =
            (base_probability + adjustments::sum_adjustments(&applied)).clamp(0.0, 1.0);

        let recommendations = generate_recommendations(
            final_probability,
            self.settings.recommendation_threshold,
            record,
            &self.settings.risk,
        );
        debug!(
            risk_score,
            final_probability,
            recommendations = recommendations.len(),
            "application scored"
        );

        Evaluation {
            assessment: Assessment::Complete {
                probability: to_percentage(final_probability),
                risk_score: to_percentage(risk_score),
                recommendations,
            },
            trace: ScoringTrace::Scored {
                features,
                indicators,
                risk_score,
                base_probability,
                adjustments: applied,
                final_probability,
            },
        }
    }
}

/// Scales a `[0, 1]` fraction to a percentage rounded to two decimals,
/// ties to even.
pub fn to_percentage(value: Probability) -> f64 {
    let scaled = value * 100.0;
    (scaled * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recommendations::{FINANCIAL_STABILITY, HOME_COUNTRY_TIES, TRAVEL_ITINERARY};
    use crate::fixtures::{full_documents, strong_applicant, weak_applicant};
    use serde_json::json;

    #[test]
    fn strong_applicant_is_clamped_to_certain_approval() {
        let assessment = ScoringEngine::default().predict_approval_probability(&strong_applicant());
        assert_eq!(
            assessment,
            Assessment::Complete {
                probability: 100.0,
                risk_score: 0.0,
                recommendations: vec![],
            }
        );
    }

    #[test]
    fn missing_category_short_circuits() {
        let mut record = strong_applicant();
        record.documents.remove("financial");

        let assessment = ScoringEngine::default().predict_approval_probability(&record);
        assert_eq!(assessment.status(), "incomplete");
        assert_eq!(assessment.probability(), 0.0);
        assert_eq!(
            assessment.missing_documents(),
            &["bank_statements".to_string(), "income_proof".to_string()]
        );
    }

    #[test]
    fn weak_applicant_gets_full_risk_and_all_advice() {
        let assessment = ScoringEngine::default().predict_approval_probability(&weak_applicant());
        assert_eq!(
            assessment,
            Assessment::Complete {
                probability: 0.0,
                risk_score: 100.0,
                recommendations: vec![
                    FINANCIAL_STABILITY.to_string(),
                    HOME_COUNTRY_TIES.to_string(),
                    TRAVEL_ITINERARY.to_string(),
                ],
            }
        );
    }

    #[test]
    fn criminal_record_pulls_probability_below_certainty() {
        let mut record = strong_applicant();
        record.criminal_record = true;

        let assessment = ScoringEngine::default().predict_approval_probability(&record);
        assert_eq!(assessment.probability(), 95.0);
        assert_eq!(assessment.risk_score(), Some(0.0));
        assert!(assessment.recommendations().is_empty());
    }

    #[test]
    fn penalties_cannot_push_below_zero() {
        let mut record = weak_applicant();
        record.previous_overstay = true;
        record.criminal_record = true;

        let evaluation = ScoringEngine::default().evaluate(&record);
        assert_eq!(evaluation.assessment.probability(), 0.0);
        match evaluation.trace {
            ScoringTrace::Scored {
                base_probability,
                final_probability,
                ..
            } => {
                assert_eq!(base_probability, 0.0);
                assert_eq!(final_probability, 0.0);
            }
            other => panic!("expected scored trace, got {other:?}"),
        }
    }

    #[test]
    fn recommendations_follow_threshold() {
        let engine = ScoringEngine::default();

        let mut record = strong_applicant();
        record.has_previous_visa = false;
        record.has_property = false;
        record.has_strong_ties = false;
        record.income = 20_000.0;
        record.bank_balance = 100.0;
        // base 0.5, no adjustments: exactly at the threshold
        let at_threshold = engine.predict_approval_probability(&record);
        assert_eq!(at_threshold.probability(), 50.0);
        assert!(at_threshold.recommendations().is_empty());

        record.previous_rejections = 2.0;
        let below = engine.predict_approval_probability(&record);
        assert_eq!(below.probability(), 25.0);
        assert_eq!(
            below.recommendations(),
            &[
                FINANCIAL_STABILITY.to_string(),
                HOME_COUNTRY_TIES.to_string()
            ]
        );
    }

    #[test]
    fn risk_ignores_non_risk_fields() {
        let engine = ScoringEngine::default();
        let baseline = engine.predict_approval_probability(&weak_applicant());

        let mut varied = weak_applicant();
        varied.age = 71.0;
        varied.employment_duration = 40.0;
        varied.has_previous_visa = true;
        varied.has_strong_ties = true;
        varied.criminal_record = true;
        let changed = engine.predict_approval_probability(&varied);

        assert_eq!(baseline.risk_score(), changed.risk_score());
    }

    #[test]
    fn adjustments_are_monotonic() {
        let engine = ScoringEngine::default();
        let mut base = weak_applicant();
        base.income = 40_000.0;
        base.previous_rejections = 0.0;

        let reference = engine.predict_approval_probability(&base).probability();

        let toggles: [(fn(&mut ApplicationRecord), bool); 5] = [
            (|record: &mut ApplicationRecord| record.has_previous_visa = true, true),
            (|record: &mut ApplicationRecord| record.has_property = true, true),
            (|record: &mut ApplicationRecord| record.has_strong_ties = true, true),
            (|record: &mut ApplicationRecord| record.previous_overstay = true, false),
            (|record: &mut ApplicationRecord| record.criminal_record = true, false),
        ];
        for (toggle, is_bonus) in toggles {
            let mut record = base.clone();
            toggle(&mut record);
            let probability = engine.predict_approval_probability(&record).probability();
            if is_bonus {
                assert!(probability >= reference);
            } else {
                assert!(probability <= reference);
            }
        }
    }

    #[test]
    fn outputs_stay_in_range_and_repeat_exactly() {
        let engine = ScoringEngine::default();
        for mask in 0u32..(1 << 9) {
            let record = ApplicationRecord {
                income: if mask & 1 != 0 { 10_000.0 } else { 60_000.0 },
                travel_history: if mask & 2 != 0 {
                    vec![]
                } else {
                    vec!["DE".to_string()]
                },
                previous_rejections: if mask & 4 != 0 { 1.0 } else { 0.0 },
                bank_balance: if mask & 8 != 0 { 0.0 } else { 9_000.0 },
                has_previous_visa: mask & 16 != 0,
                has_property: mask & 32 != 0,
                has_strong_ties: mask & 64 != 0,
                previous_overstay: mask & 128 != 0,
                criminal_record: mask & 256 != 0,
                documents: full_documents(),
                ..ApplicationRecord::default()
            };

            let first = engine.predict_approval_probability(&record);
            let second = engine.predict_approval_probability(&record);
            assert_eq!(first, second);
            assert!(first.is_complete());
            assert!((0.0..=100.0).contains(&first.probability()));
            let risk = first.risk_score().expect("complete result carries risk");
            assert!((0.0..=100.0).contains(&risk));
            if !first.recommendations().is_empty() {
                assert!(first.probability() < 50.0);
            }
        }
    }

    #[test]
    fn explain_lists_missing_gaps() {
        let mut record = strong_applicant();
        record.documents.remove("passport");

        match ScoringEngine::default().explain(&record) {
            ScoringTrace::DocumentsIncomplete { gaps } => {
                assert_eq!(gaps.len(), 1);
                assert_eq!(gaps[0].category, "passport");
                assert!(!gaps[0].category_present);
            }
            other => panic!("expected incomplete trace, got {other:?}"),
        }
    }

    #[test]
    fn decoded_numbers_score_by_value() {
        let engine = ScoringEngine::default();
        let decode = |income: serde_json::Value, rejections: serde_json::Value| {
            let record = ApplicationRecord::from_value(json!({
                "income": income,
                "travel_history": ["UK"],
                "bank_balance": 15000,
                "previous_rejections": rejections,
                "has_previous_visa": true,
                "has_property": true,
                "has_strong_ties": true,
                "documents": full_documents(),
            }))
            .expect("record should decode");
            engine.predict_approval_probability(&record)
        };

        let integral = decode(json!(45000), json!(0));
        assert_eq!(integral.risk_score(), Some(0.0));
        assert_eq!(decode(json!(45000.0), json!(0)), integral);
        assert_eq!(decode(json!(10_000_000_000_000_000_000u64), json!(0)), integral);

        let fractional = decode(json!(45000), json!(1.5));
        assert_eq!(fractional.risk_score(), Some(25.0));
        assert_eq!(fractional.probability(), 100.0);
    }

    #[test]
    fn falls_below_uses_unrounded_probability() {
        let mut settings = EngineSettings::default();
        settings.recommendation_threshold = 0.500001;
        let engine = ScoringEngine::new(settings);

        let mut record = strong_applicant();
        record.has_previous_visa = false;
        record.has_property = false;
        record.has_strong_ties = false;
        record.income = 20_000.0;
        record.bank_balance = 100.0;

        let evaluation = engine.evaluate(&record);
        assert_eq!(evaluation.assessment.probability(), 50.0);
        assert!(evaluation.falls_below(0.500001));
        assert!(!evaluation.falls_below(0.5));
        assert!(!evaluation.assessment.recommendations().is_empty());
    }

    #[test]
    fn incomplete_evaluation_never_falls_below() {
        let evaluation = ScoringEngine::default().evaluate(&ApplicationRecord::default());
        assert!(!evaluation.falls_below(1.0));
    }

    #[test]
    fn percentage_rounds_to_two_places() {
        assert_eq!(to_percentage(0.95), 95.0);
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.0), 0.0);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringEngine>();
    }
}
