//! Cross-sectional statistics: winsorization, z-scoring, and quantiles.
//!
//! All statistics here are computed across the assets of a single day, never
//! across time. Two quantile conventions are used, each fixed and documented on
//! its function: winsorization bounds come from sorted-order *indices* (which
//! makes clipping idempotent), while percentile-band thresholds use *linear
//! interpolation* on sorted order.

use ndarray::Array1;

/// Minimum threshold for standard deviation to avoid division by near-zero.
/// Distributions with std below this are treated as having zero variance.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// The clipping bounds applied by a winsorization pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinsorBounds {
    /// Lower clipping bound.
    pub lower: f64,
    /// Upper clipping bound.
    pub upper: f64,
}

/// Z-scoring result containing the computed cross-sectional statistics.
#[derive(Debug, Clone, Copy)]
pub struct ZscoreStats {
    /// The cross-sectional mean of the input values.
    pub mean: f64,
    /// The cross-sectional population standard deviation (N denominator).
    pub std: f64,
    /// Whether scoring was applied (false when variance was below threshold).
    pub applied: bool,
}

/// Quantile of a sorted slice by linear interpolation on sorted order.
///
/// `pct` is a fraction in `[0, 1]`. The threshold sits at rank `pct * (n - 1)`;
/// fractional ranks interpolate linearly between the two neighboring order
/// statistics. Returns `None` for an empty slice.
///
/// The slice must already be sorted ascending; this function does not check.
///
/// # Examples
///
/// ```
/// use ronda_traits::stats::quantile;
///
/// let sorted = vec![10.0, 20.0, 30.0];
/// assert_eq!(quantile(&sorted, 0.0), Some(10.0));
/// assert_eq!(quantile(&sorted, 0.5), Some(20.0));
/// assert_eq!(quantile(&sorted, 1.0), Some(30.0));
/// ```
#[must_use]
pub fn quantile(sorted: &[f64], pct: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let n = sorted.len();
    if n == 1 {
        return Some(sorted[0]);
    }
    let rank = pct.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Winsorize a slice in place: clip every value to the percentile band
/// `[lo_pct, hi_pct]` of the slice's own distribution.
///
/// Bounds use the index convention: on the sorted finite values, the lower
/// bound is `sorted[floor(n * lo_pct)]` and the upper bound is
/// `sorted[min(ceil(n * hi_pct), n - 1)]`. Because both bounds are existing
/// order statistics that clipping leaves in place, winsorizing an
/// already-winsorized slice at the same percentiles changes nothing.
///
/// Returns the bounds that were applied, or `None` when winsorization is a
/// no-op: fewer than two finite values, or all finite values equal. Non-finite
/// values are ignored for bound computation and left untouched.
pub fn winsorize(values: &mut [f64], lo_pct: f64, hi_pct: f64) -> Option<WinsorBounds> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.len() < 2 {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if sorted[0] == sorted[n - 1] {
        return None;
    }

    let lower_idx = (((n as f64) * lo_pct).floor() as usize).min(n - 1);
    let upper_idx = (((n as f64) * hi_pct).ceil() as usize).min(n - 1);
    let lower = sorted[lower_idx];
    let upper = sorted[upper_idx];

    for v in values.iter_mut() {
        if v.is_finite() {
            *v = v.clamp(lower, upper);
        }
    }

    Some(WinsorBounds { lower, upper })
}

/// Z-score a slice in place: subtract the cross-sectional mean, divide by the
/// cross-sectional **population** standard deviation (N denominator).
///
/// A degenerate distribution (std below [`MIN_STD_THRESHOLD`], including
/// all-equal and single-value inputs) produces all zeros rather than NaN, so a
/// flat signal contributes nothing to a composite instead of corrupting it.
pub fn zscore(values: &mut [f64]) -> ZscoreStats {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        for v in values.iter_mut() {
            *v = 0.0;
        }
        return ZscoreStats {
            mean: f64::NAN,
            std: f64::NAN,
            applied: false,
        };
    }

    let n = finite.len();
    let mean = finite.iter().sum::<f64>() / n as f64;
    let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    let std = variance.sqrt();

    let applied = std > MIN_STD_THRESHOLD;

    if applied {
        for v in values.iter_mut() {
            *v = (*v - mean) / std;
        }
    } else {
        for v in values.iter_mut() {
            *v = 0.0;
        }
    }

    ZscoreStats { mean, std, applied }
}

/// Z-score an ndarray `Array1` to mean 0, population std 1.
///
/// Array variant of [`zscore`] for callers already holding vector data.
#[must_use]
pub fn zscore_array(scores: &Array1<f64>) -> (Array1<f64>, ZscoreStats) {
    if scores.is_empty() {
        return (
            Array1::zeros(0),
            ZscoreStats {
                mean: f64::NAN,
                std: f64::NAN,
                applied: false,
            },
        );
    }

    let mean = scores.mean().unwrap_or(0.0);
    let std = scores.std(0.0); // ddof=0 for population std

    let applied = std > MIN_STD_THRESHOLD;

    let standardized = if applied {
        (scores - mean) / std
    } else {
        Array1::zeros(scores.len())
    };

    (standardized, ZscoreStats { mean, std, applied })
}
