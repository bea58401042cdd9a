use crate::types::application::ApplicationRecord;
use crate::types::scoring::FeatureVector;

pub fn extract_features(record: &ApplicationRecord) -> FeatureVector {
    FeatureVector {
        age: record.age,
        income: record.income,
        travel_history_count: record.travel_history.len(),
        bank_balance: record.bank_balance,
        employment_duration: record.employment_duration,
        previous_visa_rejections: record.previous_rejections,
    }
}
