#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the ronda stock-selection engine.
//!
//! Everything here is recomputed from scratch once per evaluation day: no type in
//! this crate carries state across days, and every computation takes its as-of day
//! as an explicit argument.

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod optimizer;
pub mod stats;
pub mod types;
pub mod universe;

// Re-exports
pub use error::{Result, RondaError};
pub use optimizer::{Constraint, Optimizer, OptimizerRequest, TargetWeights};
pub use types::{CrossSection, Date, MarketData, Symbol};
pub use universe::{StaticUniverse, Universe};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
