use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Careers page request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Careers page returned HTTP {status}")]
    HttpStatusError { status: reqwest::StatusCode },

    #[error("Embedded job data is not valid JSON: {0}")]
    ExtractionError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SearchError>;
