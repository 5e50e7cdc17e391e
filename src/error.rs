//! Error types shared by the parameter loader and the projection engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Unknown override key '{name}': not present in the baseline")]
    UnknownOverrideKey { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
