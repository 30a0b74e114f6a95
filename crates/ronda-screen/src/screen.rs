//! Percentile-band screening of a composite score over the base universe.

use std::collections::BTreeSet;

use ronda_traits::stats::quantile;
use ronda_traits::{CrossSection, Result, RondaError, Symbol};
use serde::{Deserialize, Serialize};

/// A percentile band `[lo, hi]`, in percent.
///
/// Thresholds are computed by linear interpolation on sorted order: the `p`-th
/// percentile sits at rank `p/100 * (n - 1)` of the sorted population values,
/// interpolating between neighboring order statistics. Both edges are
/// inclusive. Bands compose by set intersection of their results; the engine
/// uses a broader band to bound the selection population and a narrower one as
/// the published screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBand {
    /// Lower percentile, `0..=100`.
    pub lo: f64,
    /// Upper percentile, `0..=100`.
    pub hi: f64,
}

impl PercentileBand {
    /// Creates a band. Validation happens at use time, so configuration files
    /// can be constructed freely and rejected with a clear error when applied.
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Checks `0 <= lo <= hi <= 100`.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`] for an inverted or out-of-range
    /// band.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.lo)
            || !(0.0..=100.0).contains(&self.hi)
            || self.lo > self.hi
        {
            return Err(RondaError::Configuration(format!(
                "percentile band must satisfy 0 <= lo <= hi <= 100, got [{}, {}]",
                self.lo, self.hi
            )));
        }
        Ok(())
    }
}

/// Population members whose score lies within the band.
///
/// The percentile thresholds are computed over the score distribution
/// restricted to `population` members that have a score — the band is relative
/// to that day's population, not to the score's full domain. Members without a
/// score are never eligible. An empty restricted population yields an empty
/// set, not an error.
pub fn percentile_band(
    scores: &CrossSection,
    population: &BTreeSet<Symbol>,
    band: PercentileBand,
) -> Result<BTreeSet<Symbol>> {
    band.validate()?;

    let members: Vec<(&Symbol, f64)> = population
        .iter()
        .filter_map(|s| scores.get(s).map(|v| (s, v)))
        .collect();
    if members.is_empty() {
        return Ok(BTreeSet::new());
    }

    let mut sorted: Vec<f64> = members.iter().map(|(_, v)| *v).collect();
    sorted.sort_by(f64::total_cmp);

    let (Some(lower), Some(upper)) = (
        quantile(&sorted, band.lo / 100.0),
        quantile(&sorted, band.hi / 100.0),
    ) else {
        return Ok(BTreeSet::new());
    };

    Ok(members
        .into_iter()
        .filter(|(_, v)| *v >= lower && *v <= upper)
        .map(|(s, _)| s.clone())
        .collect())
}
