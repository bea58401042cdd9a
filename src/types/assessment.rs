use serde::{Deserialize, Serialize};

/// Result record returned for every scored application.
///
/// Serialized with a `status` tag so the JSON matches the consumer contract:
/// `{"status": "incomplete", "missing_documents": [...], "probability": 0.0}`
/// or `{"status": "complete", "probability": .., "risk_score": .., "recommendations": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Assessment {
    Incomplete {
        missing_documents: Vec<String>,
        probability: f64,
    },
    Complete {
        probability: f64,
        risk_score: f64,
        recommendations: Vec<String>,
    },
}

impl Assessment {
    pub fn incomplete(missing_documents: Vec<String>) -> Self {
        Self::Incomplete {
            missing_documents,
            probability: 0.0,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Incomplete { .. } => "incomplete",
            Self::Complete { .. } => "complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    pub fn probability(&self) -> f64 {
        match self {
            Self::Incomplete { probability, .. } | Self::Complete { probability, .. } => {
                *probability
            }
        }
    }

    pub fn risk_score(&self) -> Option<f64> {
        match self {
            Self::Complete { risk_score, .. } => Some(*risk_score),
            Self::Incomplete { .. } => None,
        }
    }

    pub fn recommendations(&self) -> &[String] {
        match self {
            Self::Complete {
                recommendations, ..
            } => recommendations,
            Self::Incomplete { .. } => &[],
        }
    }

    pub fn missing_documents(&self) -> &[String] {
        match self {
            Self::Incomplete {
                missing_documents, ..
            } => missing_documents,
            Self::Complete { .. } => &[],
        }
    }
}
