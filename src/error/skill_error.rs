use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::violation::ValidationErrorSet;

/// Failure to decode an inbound skill request
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DecodeError {
    #[error("Malformed request body: {0}")]
    Parse(String),

    #[error("Missing required field: {path}")]
    MissingField { path: String },

    #[error("Invalid request structure: {0}")]
    InvalidStructure(String),
}

impl DecodeError {
    pub fn missing<S: Into<String>>(path: S) -> Self {
        DecodeError::MissingField { path: path.into() }
    }
}

/// Crate-level error
#[derive(Error, Debug)]
pub enum SkillError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationErrorSet),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
