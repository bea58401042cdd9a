//! Application records shared by unit tests.

use crate::types::application::{ApplicationRecord, DocumentFields, Documents};
use serde_json::Value;

pub(crate) fn fields(names: &[&str]) -> DocumentFields {
    names
        .iter()
        .map(|name| (name.to_string(), Value::Bool(true)))
        .collect()
}

/// Every field of the default required-documents table.
pub(crate) fn full_documents() -> Documents {
    let mut documents = Documents::new();
    documents.insert(
        "passport".to_string(),
        fields(&["expiry_date", "issue_date", "nationality"]),
    );
    documents.insert(
        "financial".to_string(),
        fields(&["bank_statements", "income_proof"]),
    );
    documents.insert(
        "purpose".to_string(),
        fields(&["invitation_letter", "travel_itinerary"]),
    );
    documents.insert(
        "personal".to_string(),
        fields(&["employment_status", "travel_history"]),
    );
    documents
}

pub(crate) fn strong_applicant() -> ApplicationRecord {
    ApplicationRecord {
        age: 30.0,
        income: 45_000.0,
        travel_history: vec!["UK".to_string(), "France".to_string()],
        bank_balance: 15_000.0,
        employment_duration: 5.0,
        previous_rejections: 0.0,
        has_previous_visa: true,
        has_property: true,
        has_strong_ties: true,
        documents: full_documents(),
        ..ApplicationRecord::default()
    }
}

pub(crate) fn weak_applicant() -> ApplicationRecord {
    ApplicationRecord {
        income: 10_000.0,
        travel_history: vec![],
        bank_balance: 1_000.0,
        previous_rejections: 1.0,
        documents: full_documents(),
        ..ApplicationRecord::default()
    }
}
