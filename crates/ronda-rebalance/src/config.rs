//! Strategy configuration.

use ronda_screen::{Normalizer, PercentileBand};
use ronda_signals::{library, SignalDef};
use ronda_traits::{Constraint, Result, RondaError};
use serde::{Deserialize, Serialize};

/// Everything that parameterizes one strategy.
///
/// Defaults: 10%/90% winsorization, a [5, 45] quality band bounding the
/// selection population, a [0, 30] published screen, 500 total positions
/// split evenly long and short, a per-name cap of ten equal-weight slots, and
/// full investment at 100% gross.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Lower winsorization percentile, as a fraction in `[0, 1]`.
    pub winsor_lo: f64,
    /// Upper winsorization percentile, as a fraction in `[0, 1]`.
    pub winsor_hi: f64,
    /// Quality-composite percentile band bounding the selection population.
    pub quality_band: PercentileBand,
    /// Narrower quality band applied as an additional screen on the published
    /// report. Independent of and composable with `quality_band`.
    pub publish_band: PercentileBand,
    /// Target total position count; longs and shorts each get half.
    pub total_positions: usize,
    /// Per-name weight cap, in multiples of the equal-weight slot
    /// `1 / total_positions`. Applied symmetrically to longs and shorts.
    pub position_cap_slots: f64,
    /// Maximum gross exposure as a fraction of capital.
    pub max_gross_exposure: f64,
    /// Inputs to the quality composite, in combination order.
    pub quality_inputs: Vec<SignalDef>,
    /// Inputs to the selection composite, in combination order.
    pub selection_inputs: Vec<SignalDef>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            winsor_lo: 0.10,
            winsor_hi: 0.90,
            quality_band: PercentileBand::new(5.0, 45.0),
            publish_band: PercentileBand::new(0.0, 30.0),
            total_positions: 500,
            position_cap_slots: 10.0,
            max_gross_exposure: 1.0,
            quality_inputs: default_quality_inputs(),
            selection_inputs: default_selection_inputs(),
        }
    }
}

/// The four quality-composite inputs.
#[must_use]
pub fn default_quality_inputs() -> Vec<SignalDef> {
    vec![
        library::ev_ebitda_yield(),
        library::ev_to_ebit(),
        library::cash_return(),
        library::return_on_equity(),
    ]
}

/// The eight selection-composite inputs.
#[must_use]
pub fn default_selection_inputs() -> Vec<SignalDef> {
    vec![
        library::momentum_short(),
        library::momentum_long(),
        library::net_income_growth(),
        library::peg_ratio(),
        library::current_ratio(),
        library::return_on_equity(),
        library::ev_ebitda_yield(),
        library::pe_ratio(),
    ]
}

impl StrategyConfig {
    /// Long side target count.
    pub const fn long_count(&self) -> usize {
        self.total_positions / 2
    }

    /// Short side target count.
    pub const fn short_count(&self) -> usize {
        self.total_positions / 2
    }

    /// The symmetric per-position weight bound.
    pub fn position_cap(&self) -> f64 {
        self.position_cap_slots / self.total_positions as f64
    }

    /// The constraint list handed to the optimizer, in a fixed order.
    pub fn constraints(&self) -> Vec<Constraint> {
        let cap = self.position_cap();
        vec![
            Constraint::MaxGrossExposure(self.max_gross_exposure),
            Constraint::DollarNeutral,
            Constraint::PositionBounds {
                min: -cap,
                max: cap,
            },
        ]
    }

    /// Rejects inconsistent parameters before any data is touched.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`] for invalid winsor percentiles or
    /// bands, a zero position count, a non-positive per-name cap or gross
    /// limit, or an empty composite input list.
    pub fn validate(&self) -> Result<()> {
        Normalizer::new(self.winsor_lo, self.winsor_hi)?;
        self.quality_band.validate()?;
        self.publish_band.validate()?;

        if self.total_positions == 0 {
            return Err(RondaError::Configuration(
                "total_positions must be positive".to_string(),
            ));
        }
        if self.position_cap_slots <= 0.0 {
            return Err(RondaError::Configuration(
                "position_cap_slots must be positive".to_string(),
            ));
        }
        if self.max_gross_exposure <= 0.0 {
            return Err(RondaError::Configuration(
                "max_gross_exposure must be positive".to_string(),
            ));
        }
        if self.quality_inputs.is_empty() || self.selection_inputs.is_empty() {
            return Err(RondaError::Configuration(
                "composite input lists must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
