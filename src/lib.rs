//! Rule-based visa application scoring.
//!
//! [`engine::ScoringEngine`] checks that the required supporting documents
//! are present, derives a risk score from four indicators, turns it into an
//! approval probability with fixed adjustments, and adds advice when the
//! probability is low. Scoring is pure: identical records always produce
//! identical [`types::assessment::Assessment`]s.

pub mod archive;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod intake;
pub mod report;
pub mod telemetry;
pub mod types;

pub use engine::settings::EngineSettings;
pub use engine::ScoringEngine;
pub use error::{Result, VisaScoreError};
pub use types::application::ApplicationRecord;
pub use types::assessment::Assessment;
