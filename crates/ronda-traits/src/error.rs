//! Error types for the ronda workspace.
//!
//! Per-asset data problems (too little history, a null fundamental) are not errors:
//! the asset is dropped from the affected signal's domain and the day's run carries
//! on. The variants here cover what *is* fatal to a run — malformed input data,
//! strategy misconfiguration, and optimizer infeasibility.

use thiserror::Error;

/// The main error type for ronda operations.
#[derive(Debug, Error)]
pub enum RondaError {
    /// A required column is missing from the market data.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Input data is malformed (bad date format, wrong dtype, empty frame).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Strategy misconfiguration: invalid percentile bands, invalid winsor
    /// bounds, or selection counts exceeding the eligible population. Fatal to
    /// the day's run; never silently adjusted.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The external optimizer could not satisfy its constraints. Surfaced
    /// verbatim to the caller; the engine does not retry or relax constraints.
    #[error("Optimizer infeasible: {0}")]
    Infeasible(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// A specialized Result type for ronda operations.
pub type Result<T> = std::result::Result<T, RondaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RondaError::MissingColumn("close".to_string());
        assert_eq!(err.to_string(), "Missing required column: close");

        let err = RondaError::Configuration("long_count is zero".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: long_count is zero");
    }

    #[test]
    fn test_infeasible_is_verbatim() {
        let err = RondaError::Infeasible("gross exposure bound unsatisfiable".to_string());
        assert!(err.to_string().contains("gross exposure bound unsatisfiable"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(RondaError::InvalidData("bad".to_string()));
        assert!(err_result.is_err());
    }
}
