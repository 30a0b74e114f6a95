//! Top/bottom ranking of the eligible set by the selection score.

use std::collections::BTreeSet;

use ronda_traits::{CrossSection, Result, RondaError, Symbol};
use serde::{Deserialize, Serialize};

/// The long and short candidate sets for one evaluation day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Highest-ranked assets.
    pub longs: BTreeSet<Symbol>,
    /// Lowest-ranked assets.
    pub shorts: BTreeSet<Symbol>,
}

impl Selection {
    /// Union of both sides.
    pub fn union(&self) -> BTreeSet<Symbol> {
        self.longs.union(&self.shorts).cloned().collect()
    }

    /// Total selected count.
    pub fn count(&self) -> usize {
        self.longs.len() + self.shorts.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.longs.is_empty() && self.shorts.is_empty()
    }
}

/// Rank the eligible set by score and take the top and bottom.
///
/// Ranking is over `eligible ∩ domain(scores)`, descending by score with ties
/// broken by symbol ascending — one deterministic order, reproducible across
/// runs on identical inputs. Longs are the head of that ranking, shorts the
/// tail, so the two sides can never overlap.
///
/// An empty rankable population yields an empty [`Selection`]: a day with
/// nothing eligible is a quiet day, not a failure. A *non-empty* population
/// smaller than `long_count + short_count` is a
/// [`RondaError::Configuration`] — the counts describe the strategy, and
/// silently shrinking them would hide a misconfiguration.
pub fn select(
    eligible: &BTreeSet<Symbol>,
    scores: &CrossSection,
    long_count: usize,
    short_count: usize,
) -> Result<Selection> {
    let mut ranked: Vec<(&Symbol, f64)> = eligible
        .iter()
        .filter_map(|s| scores.get(s).map(|v| (s, v)))
        .collect();

    if ranked.is_empty() {
        return Ok(Selection::default());
    }
    if long_count + short_count > ranked.len() {
        return Err(RondaError::Configuration(format!(
            "selection counts {long_count} long + {short_count} short exceed the {} rankable assets",
            ranked.len()
        )));
    }

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let longs = ranked
        .iter()
        .take(long_count)
        .map(|(s, _)| (*s).clone())
        .collect();
    let shorts = ranked
        .iter()
        .rev()
        .take(short_count)
        .map(|(s, _)| (*s).clone())
        .collect();

    Ok(Selection { longs, shorts })
}
