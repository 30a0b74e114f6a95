#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ronda
//!
//! Daily cross-sectional stock-selection engine.
//!
//! ## Architecture
//!
//! ronda runs the same pipeline once per evaluation day:
//!
//! 1. **Signals** compute raw per-asset values from point-in-time history
//! 2. **Normalization** winsorizes and z-scores each signal over that day's
//!    active set
//! 3. **Composites** sum normalized signals over the strict intersection of
//!    their domains
//! 4. **Screening** keeps base-universe members inside a quality percentile
//!    band
//! 5. **Selection** ranks by the selection composite and takes the top and
//!    bottom
//! 6. **Orchestration** restricts the score map to the chosen assets and hands
//!    it, with the constraint list, to the external optimizer
//!
//! Nothing persists across days; every run is a pure function of its inputs.

/// Version information for the ronda crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core types and collaborator traits.
pub mod traits {
    pub use ronda_traits::*;
}

/// Raw signal library and registry.
pub mod signals {
    pub use ronda_signals::*;
}

/// Cross-sectional normalization, composites, screening, and selection.
pub mod screen {
    pub use ronda_screen::*;
}

/// Strategy configuration and daily orchestration.
pub mod rebalance {
    pub use ronda_rebalance::*;
}

// Re-export core types at top level for convenience
pub use ronda_rebalance::{RebalanceReport, Rebalancer, StrategyConfig};
pub use ronda_traits::{
    Constraint, CrossSection, Date, MarketData, Optimizer, OptimizerRequest, Result, RondaError,
    Symbol, TargetWeights, Universe,
};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use ronda::prelude::*;
/// ```
pub mod prelude {
    pub use ronda_rebalance::{record_metrics, Rebalancer, StrategyConfig};
    pub use ronda_screen::{Normalizer, PercentileBand, Selection};
    pub use ronda_signals::{library, SignalDef, SignalKind};
    pub use ronda_traits::{
        CrossSection, Date, MarketData, Optimizer, OptimizerRequest, Result, RondaError,
        StaticUniverse, Symbol, TargetWeights, Universe,
    };
}
