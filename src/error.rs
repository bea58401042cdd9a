use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisaScoreError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid application record {path}: {reason}")]
    InvalidApplication { path: String, reason: String },

    #[error("archive write failed: {0}")]
    Archive(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VisaScoreError>;
