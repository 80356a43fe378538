//! Error handling for the municipal health pipeline.
//!
//! Undefined statistics (empty input, zero variance, zero denominators) are
//! not errors; they travel as `Metric::Undefined` values. Errors here are
//! rejected inputs and failures of the serialization collaborators.

use arrow::error::ArrowError;

/// Errors that can occur while building or presenting a dashboard view
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A filter range whose lower bound exceeds its upper bound, or is not finite
    #[error("Invalid range for {field}: [{lo}, {hi}]")]
    InvalidRange {
        /// Column the range applies to
        field: &'static str,
        /// Lower bound
        lo: f64,
        /// Upper bound
        hi: f64,
    },

    /// More records requested than synthetic codes are available
    #[error("Record count {0} exceeds the available municipality codes")]
    RecordCount(usize),

    /// A statistic was requested for a column the record does not have
    #[error("Unknown numeric column: {0}")]
    UnknownColumn(String),

    /// Invalid noise distribution parameters
    #[error("Distribution error: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Record batch conversion error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
