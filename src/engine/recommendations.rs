use super::settings::RiskThresholds;
use crate::types::application::ApplicationRecord;
use crate::types::scoring::Probability;

pub const FINANCIAL_STABILITY: &str = "Consider providing additional proof of financial stability";
pub const HOME_COUNTRY_TIES: &str = "Strengthen documentation of ties to home country";
pub const TRAVEL_ITINERARY: &str = "Include detailed travel itinerary and purpose of visit";

/// Advice for applications whose clamped probability falls below `threshold`.
/// Empty at or above the threshold.
pub fn generate_recommendations(
    probability: Probability,
    threshold: Probability,
    record: &ApplicationRecord,
    risk: &RiskThresholds,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    if probability >= threshold {
        return recommendations;
    }

    if risk.is_low_income(record.income) {
        recommendations.push(FINANCIAL_STABILITY.to_string());
    }
    if !record.has_strong_ties {
        recommendations.push(HOME_COUNTRY_TIES.to_string());
    }
    if record.travel_history.is_empty() {
        recommendations.push(TRAVEL_ITINERARY.to_string());
    }

    recommendations
}
