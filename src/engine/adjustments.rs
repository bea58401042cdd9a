use super::settings::AdjustmentWeights;
use crate::types::application::ApplicationRecord;
use crate::types::scoring::{AdjustmentKind, AppliedAdjustment, Probability};

/// Adjustments that apply to `record`, bonuses first then penalties.
pub fn applied_adjustments(
    record: &ApplicationRecord,
    weights: &AdjustmentWeights,
) -> Vec<AppliedAdjustment> {
    [
        (record.has_previous_visa, AdjustmentKind::PreviousVisa, weights.previous_visa),
        (record.has_property, AdjustmentKind::Property, weights.property),
        (record.has_strong_ties, AdjustmentKind::StrongTies, weights.strong_ties),
        (
            record.previous_overstay,
            AdjustmentKind::PreviousOverstay,
            weights.previous_overstay,
        ),
        (
            record.criminal_record,
            AdjustmentKind::CriminalRecord,
            weights.criminal_record,
        ),
    ]
    .into_iter()
    .filter(|(applies, _, _)| *applies)
    .map(|(_, kind, delta)| AppliedAdjustment { kind, delta })
    .collect()
}

/// Net adjustment, accumulated from 0.0 in the fixed order above.
pub fn calculate_adjustments(record: &ApplicationRecord, weights: &AdjustmentWeights) -> Probability {
    sum_adjustments(&applied_adjustments(record, weights))
}

pub(crate) fn sum_adjustments(adjustments: &[AppliedAdjustment]) -> Probability {
    adjustments
        .iter()
        .fold(0.0, |total, adjustment| total + adjustment.delta)
}
