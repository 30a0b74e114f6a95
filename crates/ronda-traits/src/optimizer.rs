//! The constrained portfolio-optimizer collaborator.
//!
//! The engine produces an alpha map and a list of portfolio-level constraints;
//! turning those into target weights is the optimizer's job. The engine never
//! interprets the constraints, never checks feasibility, and never retries or
//! relaxes anything when the optimizer fails — an infeasible day is surfaced to
//! the caller exactly as the optimizer reported it, because masking it would
//! silently change risk exposure.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{CrossSection, Date};

/// A portfolio-level constraint, passed through to the optimizer unevaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// Sum of absolute position weights must not exceed this fraction of
    /// capital (1.0 = 100% gross).
    MaxGrossExposure(f64),
    /// Long and short dollar exposure must net to zero.
    DollarNeutral,
    /// Every position weight must lie within `[min, max]`.
    PositionBounds {
        /// Lower weight bound (negative for shorts).
        min: f64,
        /// Upper weight bound.
        max: f64,
    },
}

/// Everything the optimizer needs for one day's solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerRequest {
    /// The evaluation day the alpha was computed for.
    pub as_of: Date,
    /// The score map to maximize, restricted to the selected assets. May be
    /// empty on a day with no eligible assets, which the optimizer is free to
    /// resolve as "no trades".
    pub alpha: CrossSection,
    /// Portfolio-level constraints, in configuration order.
    pub constraints: Vec<Constraint>,
}

/// Target portfolio weights keyed by symbol, as a fraction of capital.
pub type TargetWeights = CrossSection;

/// A constrained portfolio optimizer.
///
/// Modeled as a single-method trait so the engine stays testable with a fake:
/// production wires in a real solver, tests and the CLI wire in stubs.
///
/// # Errors
///
/// Implementations report infeasibility (or any internal failure) through
/// [`RondaError::Infeasible`](crate::RondaError::Infeasible); callers receive
/// it unmodified.
pub trait Optimizer: Send + Sync {
    /// Solve for target weights given an alpha map and constraints.
    fn solve(&self, request: &OptimizerRequest) -> Result<TargetWeights>;
}
