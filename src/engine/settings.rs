use serde::Serialize;

/// Required fields for one document category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentCategory {
    pub category: String,
    pub fields: Vec<String>,
}

impl DocumentCategory {
    pub fn new(category: &str, fields: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
        }
    }
}

/// Ordered required-documents table. Validation walks categories in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredDocuments {
    categories: Vec<DocumentCategory>,
}

impl RequiredDocuments {
    pub fn new(categories: Vec<DocumentCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[DocumentCategory] {
        &self.categories
    }

    pub fn field_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.fields.len())
            .sum()
    }
}

impl Default for RequiredDocuments {
    fn default() -> Self {
        Self::new(vec![
            DocumentCategory::new("passport", &["expiry_date", "issue_date", "nationality"]),
            DocumentCategory::new("financial", &["bank_statements", "income_proof"]),
            DocumentCategory::new("purpose", &["invitation_letter", "travel_itinerary"]),
            DocumentCategory::new("personal", &["employment_status", "travel_history"]),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskThresholds {
    pub low_income: i64,
    pub low_bank_balance: i64,
}

impl RiskThresholds {
    pub fn is_low_income(&self, income: f64) -> bool {
        income < self.low_income as f64
    }

    pub fn is_low_bank_balance(&self, bank_balance: f64) -> bool {
        bank_balance < self.low_bank_balance as f64
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_income: 30_000,
            low_bank_balance: 5_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentWeights {
    pub previous_visa: f64,
    pub property: f64,
    pub strong_ties: f64,
    pub previous_overstay: f64,
    pub criminal_record: f64,
}

impl Default for AdjustmentWeights {
    fn default() -> Self {
        Self {
            previous_visa: 0.10,
            property: 0.05,
            strong_ties: 0.10,
            previous_overstay: -0.20,
            criminal_record: -0.30,
        }
    }
}

/// Read-only scoring configuration shared by every call on an engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSettings {
    pub required_documents: RequiredDocuments,
    pub risk: RiskThresholds,
    pub adjustments: AdjustmentWeights,
    pub recommendation_threshold: f64,
}

pub const DEFAULT_RECOMMENDATION_THRESHOLD: f64 = 0.5;

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            required_documents: RequiredDocuments::default(),
            risk: RiskThresholds::default(),
            adjustments: AdjustmentWeights::default(),
            recommendation_threshold: DEFAULT_RECOMMENDATION_THRESHOLD,
        }
    }
}
