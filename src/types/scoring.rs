use serde::Serialize;

pub type Probability = f64;

/// Numeric projection of an application record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    pub age: f64,
    pub income: f64,
    pub travel_history_count: usize,
    pub bank_balance: f64,
    pub employment_duration: f64,
    pub previous_visa_rejections: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskIndicatorKind {
    LowIncome,
    NoTravelHistory,
    PreviousRejections,
    LowBankBalance,
}

impl RiskIndicatorKind {
    pub const ALL: [RiskIndicatorKind; 4] = [
        RiskIndicatorKind::LowIncome,
        RiskIndicatorKind::NoTravelHistory,
        RiskIndicatorKind::PreviousRejections,
        RiskIndicatorKind::LowBankBalance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowIncome => "low_income",
            Self::NoTravelHistory => "no_travel_history",
            Self::PreviousRejections => "previous_rejections",
            Self::LowBankBalance => "low_bank_balance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskIndicator {
    pub kind: RiskIndicatorKind,
    pub triggered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    PreviousVisa,
    Property,
    StrongTies,
    PreviousOverstay,
    CriminalRecord,
}

impl AdjustmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreviousVisa => "has_previous_visa",
            Self::Property => "has_property",
            Self::StrongTies => "has_strong_ties",
            Self::PreviousOverstay => "previous_overstay",
            Self::CriminalRecord => "criminal_record",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppliedAdjustment {
    pub kind: AdjustmentKind,
    pub delta: Probability,
}

/// Missing fields for one required-documents category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGap {
    pub category: String,
    pub category_present: bool,
    pub missing_fields: Vec<String>,
}

/// Step-by-step account of how one assessment was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ScoringTrace {
    DocumentsIncomplete {
        gaps: Vec<CategoryGap>,
    },
    Scored {
        features: FeatureVector,
        indicators: Vec<RiskIndicator>,
        risk_score: Probability,
        base_probability: Probability,
        adjustments: Vec<AppliedAdjustment>,
        final_probability: Probability,
    },
}
