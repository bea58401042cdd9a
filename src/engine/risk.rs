use super::settings::RiskThresholds;
use crate::types::scoring::{FeatureVector, Probability, RiskIndicator, RiskIndicatorKind};

pub fn risk_indicators(features: &FeatureVector, thresholds: &RiskThresholds) -> Vec<RiskIndicator> {
    RiskIndicatorKind::ALL
        .iter()
        .map(|&kind| {
            let triggered = match kind {
                RiskIndicatorKind::LowIncome => thresholds.is_low_income(features.income),
                RiskIndicatorKind::NoTravelHistory => features.travel_history_count == 0,
                RiskIndicatorKind::PreviousRejections => features.previous_visa_rejections > 0.0,
                RiskIndicatorKind::LowBankBalance => {
                    thresholds.is_low_bank_balance(features.bank_balance)
                }
            };
            RiskIndicator { kind, triggered }
        })
        .collect()
}

/// Fraction of indicators that fired, in `[0, 1]`.
pub fn calculate_risk_score(features: &FeatureVector, thresholds: &RiskThresholds) -> Probability {
    risk_score_from(&risk_indicators(features, thresholds))
}

pub(crate) fn risk_score_from(indicators: &[RiskIndicator]) -> Probability {
    if indicators.is_empty() {
        return 0.0;
    }
    let triggered = indicators
        .iter()
        .filter(|indicator| indicator.triggered)
        .count();
    triggered as Probability / indicators.len() as Probability
}
