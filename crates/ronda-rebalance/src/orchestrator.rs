//! The two daily entry points: rebalance and end-of-day recording.

use std::fmt;

use ronda_traits::{
    Date, MarketData, Optimizer, OptimizerRequest, Result, TargetWeights, Universe,
};
use serde::{Deserialize, Serialize};

use crate::config::StrategyConfig;
use crate::pipeline::{self, PipelineOutput};

/// Everything one rebalance produced: the pipeline output, the request as it
/// went to the optimizer, and the weights that came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceReport {
    /// The full pipeline output for the day.
    pub pipeline: PipelineOutput,
    /// The request handed to the optimizer.
    pub request: OptimizerRequest,
    /// The optimizer's target weights, unmodified.
    pub weights: TargetWeights,
}

/// End-of-day portfolio metrics, recorded at market close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The trading day.
    pub as_of: Date,
    /// Number of non-zero positions.
    pub positions: usize,
    /// Gross exposure as a fraction of capital.
    pub leverage: f64,
}

/// Drives one strategy against an injected optimizer.
///
/// Holds no market state: each [`Rebalancer::rebalance`] call is a pure
/// function of the data, universe, and day it is given, so a single instance
/// can serve any number of days in any order.
pub struct Rebalancer {
    config: StrategyConfig,
    optimizer: Box<dyn Optimizer>,
}

impl Rebalancer {
    /// Creates a rebalancer, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`](ronda_traits::RondaError::Configuration)
    /// for an invalid strategy configuration.
    pub fn new(config: StrategyConfig, optimizer: Box<dyn Optimizer>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, optimizer })
    }

    /// The strategy configuration.
    pub const fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Run one day: score, screen, select, and hand the restricted alpha map
    /// plus the configured constraints to the optimizer.
    ///
    /// The optimizer's outcome is returned as-is. On failure the error passes
    /// through verbatim — no retry, no constraint relaxation, no fallback
    /// portfolio — because papering over infeasibility would silently change
    /// the strategy's risk exposure.
    pub fn rebalance(
        &self,
        data: &MarketData,
        universe: &dyn Universe,
        as_of: Date,
    ) -> Result<RebalanceReport> {
        let pipeline = pipeline::run(data, universe, &self.config, as_of)?;
        let request = OptimizerRequest {
            as_of,
            alpha: pipeline.alpha.clone(),
            constraints: self.config.constraints(),
        };
        let weights = self.optimizer.solve(&request)?;
        Ok(RebalanceReport {
            pipeline,
            request,
            weights,
        })
    }
}

impl fmt::Debug for Rebalancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rebalancer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Record end-of-day metrics from a target-weight map.
///
/// Reads already-computed state only; nothing here feeds back into scoring.
#[must_use]
pub fn record_metrics(as_of: Date, weights: &TargetWeights) -> DailyRecord {
    DailyRecord {
        as_of,
        positions: weights.iter().filter(|(_, w)| *w != 0.0).count(),
        leverage: weights.iter().map(|(_, w)| w.abs()).sum(),
    }
}
