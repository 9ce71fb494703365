//! Error handling for the relevance engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelevanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Taxonomy load error: {0}")]
    TaxonomyLoad(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: missing or invalid field `{field}`: {reason}")]
    Validation { field: String, reason: String },

    #[error("Embedding provider error: {0}")]
    Embedding(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RelevanceError>;

impl RelevanceError {
    pub fn validation(field: &str, reason: &str) -> Self {
        RelevanceError::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for RelevanceError {
    fn from(err: anyhow::Error) -> Self {
        RelevanceError::Embedding(err.to_string())
    }
}
