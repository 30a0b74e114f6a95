//! Cross-sectional normalization: winsorize, then z-score.

use ndarray::Array1;
use ronda_traits::stats;
use ronda_traits::{CrossSection, Result, RondaError};
use serde::{Deserialize, Serialize};

/// Winsorizes and z-scores one signal's raw cross-section.
///
/// Normalization is relative to the day's active set — the assets that have the
/// raw value — not to any historical distribution. The output has the same
/// domain as the input: assets without the raw value stay absent.
///
/// Percentiles are fractions in `[0, 1]`; the default clips at the 10th and
/// 90th percentiles. Z-scoring divides by the population standard deviation,
/// and a degenerate day (all values equal) scores every asset 0 rather than
/// NaN, so a flat signal drops out of its composites without corrupting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalizer {
    lo_pct: f64,
    hi_pct: f64,
}

impl Normalizer {
    /// Creates a normalizer clipping at the given percentile fractions.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::Configuration`] unless `0 <= lo <= hi <= 1`.
    pub fn new(lo_pct: f64, hi_pct: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&lo_pct) || !(0.0..=1.0).contains(&hi_pct) || lo_pct > hi_pct {
            return Err(RondaError::Configuration(format!(
                "winsor percentiles must satisfy 0 <= lo <= hi <= 1, got [{lo_pct}, {hi_pct}]"
            )));
        }
        Ok(Self { lo_pct, hi_pct })
    }

    /// Lower winsorization percentile.
    #[must_use]
    pub const fn lo_pct(&self) -> f64 {
        self.lo_pct
    }

    /// Upper winsorization percentile.
    #[must_use]
    pub const fn hi_pct(&self) -> f64 {
        self.hi_pct
    }

    /// Winsorize and z-score a raw cross-section.
    #[must_use]
    pub fn normalize(&self, raw: &CrossSection) -> CrossSection {
        let mut values = raw.to_values();
        stats::winsorize(&mut values, self.lo_pct, self.hi_pct);
        let (scored, _) = stats::zscore_array(&Array1::from_vec(values));

        raw.symbols()
            .cloned()
            .zip(scored.into_iter())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            lo_pct: 0.10,
            hi_pct: 0.90,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cross_section(pairs: &[(&str, f64)]) -> CrossSection {
        pairs
            .iter()
            .map(|(s, v)| (s.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_invalid_percentiles_rejected() {
        assert!(Normalizer::new(0.5, 0.1).is_err());
        assert!(Normalizer::new(-0.1, 0.9).is_err());
        assert!(Normalizer::new(0.1, 1.5).is_err());
        assert!(Normalizer::new(0.1, 0.9).is_ok());
    }

    #[test]
    fn test_normalize_mean_zero_std_one() {
        let raw = cross_section(&[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("E", 5.0)]);
        let scored = Normalizer::new(0.0, 1.0).unwrap().normalize(&raw);

        let values = scored.to_values();
        let mean: f64 = values.iter().sum::<f64>() / values.len() as f64;
        let var: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

        assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
        assert_relative_eq!(var.sqrt(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_preserves_domain() {
        let raw = cross_section(&[("MSFT", 10.0), ("AAPL", -3.0)]);
        let scored = Normalizer::default().normalize(&raw);

        assert_eq!(scored.len(), 2);
        assert!(scored.contains("AAPL"));
        assert!(scored.contains("MSFT"));
        assert!(!scored.contains("GOOG"));
    }

    #[test]
    fn test_normalize_degenerate_day_scores_zero() {
        let raw = cross_section(&[("A", 7.0), ("B", 7.0), ("C", 7.0)]);
        let scored = Normalizer::default().normalize(&raw);

        assert!(scored.to_values().iter().all(|&v| v == 0.0));
        assert!(!scored.to_values().iter().any(|v| v.is_nan()));
    }

    #[test]
    fn test_normalize_clips_outlier_influence() {
        // With a wild outlier, winsorization keeps the rest of the
        // distribution from being crushed toward the mean.
        let mut pairs: Vec<(String, f64)> = (0..20).map(|i| (format!("S{i:02}"), i as f64)).collect();
        pairs[19].1 = 1_000_000.0;
        let raw: CrossSection = pairs.into_iter().collect();

        let scored = Normalizer::default().normalize(&raw);
        let max = scored
            .to_values()
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(max < 3.0);
    }

    #[test]
    fn test_normalize_empty_and_singleton() {
        let normalizer = Normalizer::default();
        assert!(normalizer.normalize(&CrossSection::new()).is_empty());

        let one = cross_section(&[("A", 5.0)]);
        let scored = normalizer.normalize(&one);
        assert_eq!(scored.get("A"), Some(0.0));
    }

    #[test]
    fn test_normalize_is_monotone() {
        let raw = cross_section(&[("A", -2.0), ("B", 0.5), ("C", 1.0), ("D", 8.0), ("E", 9.0)]);
        let scored = Normalizer::new(0.0, 1.0).unwrap().normalize(&raw);

        let a = scored.get("A").unwrap();
        let b = scored.get("B").unwrap();
        let d = scored.get("D").unwrap();
        assert!(a < b);
        assert!(b < d);
    }
}
