// SPDX-License-Identifier: MIT

//! Typed error handling for event-rules
//!
//! `ConfigurationError` is what a condition reports when it cannot be
//! evaluated. `RuleError` wraps it together with the failures that can
//! happen while loading and building conditions.

use thiserror::Error;

/// A condition could not be evaluated because its configuration is unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A required field is absent from the condition data
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// A field is present but has the wrong shape
    #[error("invalid value for field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// The `match` token is not one of the known operators
    #[error("unknown match type: {0:?}")]
    UnknownMatchType(String),
}

impl ConfigurationError {
    /// Create a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Top-level error type for event-rules
#[derive(Debug, Error)]
pub enum RuleError {
    /// Condition configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// No constructor registered under this condition id
    #[error("Condition '{id}' not found")]
    UnknownCondition { id: String },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl RuleError {
    /// Create an unknown condition error
    pub fn unknown_condition(id: impl Into<String>) -> Self {
        Self::UnknownCondition { id: id.into() }
    }
}
