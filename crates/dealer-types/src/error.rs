//! Error types for the dealership inventory

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A numeric form field could not be read as an integer
    #[error("{field} is not a valid number: '{value}'")]
    Parse { field: String, value: String },

    /// A vehicle would violate its kind's structural rule, or an
    /// intake-side rule was broken before construction
    #[error("{0}")]
    Validation(String),
}

impl Error {
    pub fn parse(field: &str, value: &str) -> Self {
        Error::Parse {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Error::Validation(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
