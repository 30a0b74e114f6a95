//! Common types used throughout the ronda workspace.
//!
//! Two types carry all data through the daily pipeline: [`MarketData`] holds the
//! per-symbol, per-date history the signal library reads from, and
//! [`CrossSection`] holds one value per asset for a single evaluation day.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Result, RondaError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, e.g. "AAPL" or "MSFT".
pub type Symbol = String;

// Offset between days-from-CE (chrono) and days-from-Unix-epoch (polars Date).
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Container for per-symbol, per-date market history.
///
/// Wraps a Polars DataFrame with at minimum `symbol` and `date` columns, plus
/// `close` and whatever fundamental columns the configured signals require.
/// Values that are unknown for a given row are nulls, never zero.
///
/// All point-in-time access goes through [`MarketData::through`], which keeps
/// only rows dated at or before the evaluation day. Signal computations never
/// see data from the future.
#[derive(Debug, Clone)]
pub struct MarketData {
    data: DataFrame,
}

impl MarketData {
    /// Creates a new `MarketData` instance from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the market data is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == name)
    }

    /// Returns the column names.
    pub fn columns(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Rows dated at or before `date`.
    ///
    /// This is the only sanctioned way to slice history for an evaluation day;
    /// it enforces the no-look-ahead invariant for every signal built on top.
    pub fn through(&self, date: Date) -> Result<DataFrame> {
        let date_col = self.data.column("date")?;
        let mask = date_col
            .as_materialized_series()
            .date()?
            .into_iter()
            .map(|d: Option<i32>| {
                d.and_then(|d| Date::from_num_days_from_ce_opt(d + EPOCH_DAYS_FROM_CE))
                    .is_some_and(|d| d <= date)
            })
            .collect::<BooleanChunked>();
        Ok(self.data.filter(&mask)?)
    }

    /// Unique symbols present in the data, sorted.
    pub fn symbols(&self) -> Result<Vec<Symbol>> {
        let symbols = self.data.column("symbol")?.as_materialized_series().str()?;
        let mut unique: Vec<Symbol> = symbols
            .unique()?
            .into_iter()
            .filter_map(|s: Option<&str>| s.map(|s| s.to_string()))
            .collect();
        unique.sort();
        Ok(unique)
    }
}

impl From<DataFrame> for MarketData {
    fn from(data: DataFrame) -> Self {
        Self::new(data)
    }
}

impl AsRef<DataFrame> for MarketData {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}

/// One value per asset, valid for exactly one evaluation day.
///
/// The domain of a cross-section is the set of symbols present: an asset whose
/// value is unknown is absent from the map, never stored as zero or NaN. Keys
/// are held in a `BTreeMap` so iteration order — and therefore every downstream
/// statistic, ranking, and tie-break — is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossSection {
    values: BTreeMap<Symbol, f64>,
}

impl CrossSection {
    /// Creates an empty cross-section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Inserts a value for a symbol, replacing any previous value.
    pub fn insert(&mut self, symbol: impl Into<Symbol>, value: f64) {
        self.values.insert(symbol.into(), value);
    }

    /// The value for a symbol, if the symbol is in the domain.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.values.get(symbol).copied()
    }

    /// Whether a symbol is in the domain.
    pub fn contains(&self, symbol: &str) -> bool {
        self.values.contains_key(symbol)
    }

    /// Number of assets in the domain.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(symbol, value)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, f64)> {
        self.values.iter().map(|(s, v)| (s, *v))
    }

    /// The domain, in symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.values.keys()
    }

    /// Values in symbol order.
    pub fn to_values(&self) -> Vec<f64> {
        self.values.values().copied().collect()
    }

    /// A new cross-section restricted to the symbols in `keep`.
    #[must_use]
    pub fn restrict(&self, keep: &BTreeSet<Symbol>) -> Self {
        Self {
            values: self
                .values
                .iter()
                .filter(|(s, _)| keep.contains(*s))
                .map(|(s, v)| (s.clone(), *v))
                .collect(),
        }
    }

    /// The domain as an owned set.
    pub fn domain(&self) -> BTreeSet<Symbol> {
        self.values.keys().cloned().collect()
    }

    /// Builds a cross-section from parallel symbol and value slices, skipping
    /// non-finite values.
    pub fn from_pairs<S: AsRef<str>>(symbols: &[S], values: &[f64]) -> Result<Self> {
        if symbols.len() != values.len() {
            return Err(RondaError::InvalidData(format!(
                "symbol/value length mismatch: {} vs {}",
                symbols.len(),
                values.len()
            )));
        }
        Ok(symbols
            .iter()
            .zip(values.iter())
            .filter(|(_, v)| v.is_finite())
            .map(|(s, v)| (s.as_ref().to_string(), *v))
            .collect())
    }
}

impl FromIterator<(Symbol, f64)> for CrossSection {
    fn from_iter<I: IntoIterator<Item = (Symbol, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CrossSection {
    type Item = (Symbol, f64);
    type IntoIter = std::collections::btree_map::IntoIter<Symbol, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
