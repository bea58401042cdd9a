use crate::engine::settings::{
    AdjustmentWeights, DocumentCategory, EngineSettings, RequiredDocuments, RiskThresholds,
    DEFAULT_RECOMMENDATION_THRESHOLD,
};
use crate::error::VisaScoreError;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisaConfig {
    pub documents: Option<Vec<DocumentCategoryConfig>>,
    pub risk: Option<RiskConfig>,
    pub adjustments: Option<AdjustmentConfig>,
    pub recommendations: Option<RecommendationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentCategoryConfig {
    pub category: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    pub low_income_threshold: Option<i64>,
    pub low_bank_balance_threshold: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentConfig {
    pub has_previous_visa: Option<f64>,
    pub has_property: Option<f64>,
    pub has_strong_ties: Option<f64>,
    pub previous_overstay: Option<f64>,
    pub criminal_record: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    pub probability_threshold: Option<f64>,
}

impl VisaConfig {
    pub fn required_documents(&self) -> RequiredDocuments {
        match &self.documents {
            Some(categories) => RequiredDocuments::new(
                categories
                    .iter()
                    .map(|category| DocumentCategory {
                        category: category.category.trim().to_string(),
                        fields: category
                            .fields
                            .iter()
                            .map(|field| field.trim().to_string())
                            .collect(),
                    })
                    .collect(),
            ),
            None => RequiredDocuments::default(),
        }
    }

    pub fn risk_thresholds(&self) -> RiskThresholds {
        let defaults = RiskThresholds::default();
        match &self.risk {
            Some(risk) => RiskThresholds {
                low_income: risk.low_income_threshold.unwrap_or(defaults.low_income),
                low_bank_balance: risk
                    .low_bank_balance_threshold
                    .unwrap_or(defaults.low_bank_balance),
            },
            None => defaults,
        }
    }

    pub fn adjustment_weights(&self) -> AdjustmentWeights {
        let defaults = AdjustmentWeights::default();
        match &self.adjustments {
            Some(adjustments) => AdjustmentWeights {
                previous_visa: adjustments
                    .has_previous_visa
                    .unwrap_or(defaults.previous_visa),
                property: adjustments.has_property.unwrap_or(defaults.property),
                strong_ties: adjustments.has_strong_ties.unwrap_or(defaults.strong_ties),
                previous_overstay: adjustments
                    .previous_overstay
                    .unwrap_or(defaults.previous_overstay),
                criminal_record: adjustments
                    .criminal_record
                    .unwrap_or(defaults.criminal_record),
            },
            None => defaults,
        }
    }

    pub fn recommendation_threshold(&self) -> f64 {
        self.recommendations
            .as_ref()
            .and_then(|recommendations| recommendations.probability_threshold)
            .unwrap_or(DEFAULT_RECOMMENDATION_THRESHOLD)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            required_documents: self.required_documents(),
            risk: self.risk_thresholds(),
            adjustments: self.adjustment_weights(),
            recommendation_threshold: self.recommendation_threshold(),
        }
    }

    pub fn validate(&self) -> Result<(), VisaScoreError> {
        if let Some(categories) = &self.documents {
            validate_document_table(categories)?;
        }

        let risk = self.risk_thresholds();
        if risk.low_income < 0 {
            return Err(VisaScoreError::ConfigParse(
                "risk.low_income_threshold must not be negative".to_string(),
            ));
        }
        if risk.low_bank_balance < 0 {
            return Err(VisaScoreError::ConfigParse(
                "risk.low_bank_balance_threshold must not be negative".to_string(),
            ));
        }

        let weights = self.adjustment_weights();
        for (name, bonus) in [
            ("has_previous_visa", weights.previous_visa),
            ("has_property", weights.property),
            ("has_strong_ties", weights.strong_ties),
        ] {
            if !(0.0..=1.0).contains(&bonus) {
                return Err(VisaScoreError::ConfigParse(format!(
                    "adjustments.{name} must be between 0.0 and 1.0"
                )));
            }
        }
        for (name, penalty) in [
            ("previous_overstay", weights.previous_overstay),
            ("criminal_record", weights.criminal_record),
        ] {
            if !(-1.0..=0.0).contains(&penalty) {
                return Err(VisaScoreError::ConfigParse(format!(
                    "adjustments.{name} must be between -1.0 and 0.0"
                )));
            }
        }

        let threshold = self.recommendation_threshold();
        if !(0.0..=1.0).contains(&threshold) {
            return Err(VisaScoreError::ConfigParse(
                "recommendations.probability_threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_document_table(categories: &[DocumentCategoryConfig]) -> Result<(), VisaScoreError> {
    if categories.is_empty() {
        return Err(VisaScoreError::ConfigParse(
            "documents must list at least one category".to_string(),
        ));
    }

    let mut seen_categories = HashSet::<&str>::new();
    for category in categories {
        let name = category.category.trim();
        if name.is_empty() {
            return Err(VisaScoreError::ConfigParse(
                "documents entries must have a non-empty category".to_string(),
            ));
        }
        if !seen_categories.insert(name) {
            return Err(VisaScoreError::ConfigParse(format!(
                "documents contains duplicate category: {name}"
            )));
        }
        if category.fields.is_empty() {
            return Err(VisaScoreError::ConfigParse(format!(
                "documents.{name} must list at least one field"
            )));
        }

        let mut seen_fields = HashSet::<&str>::new();
        for field in &category.fields {
            let field = field.trim();
            if field.is_empty() {
                return Err(VisaScoreError::ConfigParse(format!(
                    "documents.{name} fields must be non-empty names"
                )));
            }
            if !seen_fields.insert(field) {
                return Err(VisaScoreError::ConfigParse(format!(
                    "documents.{name} contains duplicate field: {field}"
                )));
            }
        }
    }

    Ok(())
}
