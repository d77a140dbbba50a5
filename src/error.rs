use thiserror::Error;

/// Failures the analytics engine reports to its callers. Computation is
/// deterministic, so none of these are retryable with identical input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticsError {
    /// Malformed or missing input; names the offending field.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// The estimator produced a negative or non-finite rate. This points at
    /// a configuration or logic defect rather than bad caller input.
    #[error("invalid goal rate: {detail}")]
    InvalidRate { detail: String },

    /// Neither side has usable history and no fallback rate is configured.
    #[error("insufficient data: no match history for either team and no fallback rate configured")]
    InsufficientData,
}

impl AnalyticsError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_rate(detail: impl Into<String>) -> Self {
        Self::InvalidRate {
            detail: detail.into(),
        }
    }
}
