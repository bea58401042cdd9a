use crate::error::{Result, VisaScoreError};
use crate::types::assessment::Assessment;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const ARCHIVE_DIR: &str = ".visa-score";
const ASSESSMENTS_DIR: &str = "assessments";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedAssessment {
    pub version: String,
    pub generated_at: String,
    pub source: String,
    pub input_sha256: String,
    pub assessment: Assessment,
}

impl ArchivedAssessment {
    pub fn new(source: &Path, input: &[u8], assessment: Assessment) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            source: source.display().to_string(),
            input_sha256: sha256_hex(input),
            assessment,
        }
    }
}

pub fn write_assessment(root: &Path, archived: &ArchivedAssessment) -> Result<PathBuf> {
    let dir = root.join(ARCHIVE_DIR).join(ASSESSMENTS_DIR);
    fs::create_dir_all(&dir)
        .map_err(|e| VisaScoreError::Archive(format!("{}: {}", dir.display(), e)))?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let digest_prefix = archived
        .input_sha256
        .get(..12)
        .unwrap_or(archived.input_sha256.as_str());
    let out_path = dir.join(format!("assessment-{stamp}-{digest_prefix}.json"));
    let json = serde_json::to_string_pretty(archived)?;
    fs::write(&out_path, json)
        .map_err(|e| VisaScoreError::Archive(format!("{}: {}", out_path.display(), e)))?;
    Ok(out_path)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
