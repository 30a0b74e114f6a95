//! Strategy configuration and the daily rebalance orchestration for ronda.
//!
//! The pipeline wires the pieces together for one evaluation day: raw signals
//! from `ronda-signals`, normalization/composites/screening/selection from
//! `ronda-screen`, and finally an [`OptimizerRequest`] handed to the external
//! optimizer. Nothing persists between days — each run is a pure function of
//! that day's market data, base universe, and configuration.
//!
//! [`OptimizerRequest`]: ronda_traits::OptimizerRequest

pub mod config;
pub mod orchestrator;
pub mod pipeline;

// Re-export main types
pub use config::StrategyConfig;
pub use orchestrator::{record_metrics, DailyRecord, RebalanceReport, Rebalancer};
pub use pipeline::{PipelineOutput, PublishedRow};
