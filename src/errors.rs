// Copyright 2025 Cowboy AI, LLC.

//! Error types for estimation operations
//!
//! Missing attributes are not errors: they travel through the pipeline as
//! `None`. Errors are reserved for values that are present but cannot be
//! classified, for malformed reference data and configuration, and for
//! buildings that the runner had to drop.

use thiserror::Error;

/// Errors that can occur while estimating energy labels
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    /// A value is present but lies outside every member of a category
    #[error("Value out of domain for {category}: {value}")]
    OutOfDomain {
        /// Category that rejected the value
        category: &'static str,
        /// The offending value, as text
        value: String,
    },

    /// The label distribution input is malformed
    #[error("Invalid distribution for {key}: {reason}")]
    InvalidDistribution {
        /// Table key the distribution belongs to
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration value rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invariant violation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A building was dropped from a run
    #[error("Building {building_id} failed: {message}")]
    BuildingFault {
        /// Building that failed
        building_id: String,
        /// Cause, as reported by the failing stage
        message: String,
    },
}

/// Result type for estimation operations
pub type EstimationResult<T> = Result<T, EstimationError>;

impl From<serde_json::Error> for EstimationError {
    fn from(err: serde_json::Error) -> Self {
        EstimationError::SerializationError(err.to_string())
    }
}

impl EstimationError {
    /// Create an out-of-domain error for `category`
    pub fn out_of_domain(category: &'static str, value: impl ToString) -> Self {
        EstimationError::OutOfDomain {
            category,
            value: value.to_string(),
        }
    }

    /// Check if this error comes from unusable input data rather than a defect
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            EstimationError::OutOfDomain { .. }
                | EstimationError::InvalidDistribution { .. }
                | EstimationError::SerializationError(_)
        )
    }
}
