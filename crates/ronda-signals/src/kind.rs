//! Signal kinds and their uniform compute signature.

use polars::prelude::*;
use ronda_traits::{CrossSection, Date, MarketData, Result, RondaError};
use serde::{Deserialize, Serialize};

/// The computation a signal performs on one asset's history.
///
/// Every kind shares the same contract: evaluate using only rows dated at or
/// before the as-of day, and report "no value" for an asset whose inputs are
/// insufficient (too little history, a null or zero-valued fundamental). An
/// asset with no value is absent from the output cross-section, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignalKind {
    /// Simple trailing return: `close[t] / close[t - window] - 1`, computed
    /// over the most recent `window + 1` closes. Simple returns, not log
    /// returns.
    TrailingReturn {
        /// Number of trading periods between the two closes.
        window: usize,
    },
    /// Most recent non-null value of a fundamental column.
    LatestField {
        /// Column to read.
        column: String,
    },
    /// Reciprocal of the most recent non-null value. A zero value yields no
    /// signal rather than an infinity.
    InverseField {
        /// Column to read.
        column: String,
    },
    /// Ratio of the most recent non-null values of two columns. A zero
    /// denominator yields no signal.
    FieldRatio {
        /// Numerator column.
        numerator: String,
        /// Denominator column.
        denominator: String,
    },
}

impl SignalKind {
    /// Evaluate this kind over one asset's history (all rows for one symbol,
    /// already restricted to dates at or before the as-of day).
    fn value_for(&self, symbol_data: &DataFrame) -> Result<Option<f64>> {
        match self {
            Self::TrailingReturn { window } => {
                let sorted = symbol_data.sort(["date"], Default::default())?;
                let prices: Vec<f64> = column_f64(&sorted, "close")?
                    .into_iter()
                    .flatten()
                    .filter(|v| v.is_finite())
                    .collect();

                if prices.len() < window + 1 {
                    return Ok(None);
                }

                let n = prices.len();
                let current = prices[n - 1];
                let past = prices[n - 1 - window];
                if past <= 0.0 {
                    return Ok(None);
                }
                Ok(Some(current / past - 1.0))
            }
            Self::LatestField { column } => latest_value(symbol_data, column),
            Self::InverseField { column } => {
                Ok(latest_value(symbol_data, column)?
                    .map(|v| 1.0 / v)
                    .filter(|v| v.is_finite()))
            }
            Self::FieldRatio {
                numerator,
                denominator,
            } => {
                let num = latest_value(symbol_data, numerator)?;
                let den = latest_value(symbol_data, denominator)?;
                match (num, den) {
                    (Some(n), Some(d)) => Ok(Some(n / d).filter(|v| v.is_finite())),
                    _ => Ok(None),
                }
            }
        }
    }
}

/// A named signal: an identifier plus the computation it performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalDef {
    /// Unique signal name, used for caching, configuration, and display.
    pub name: String,
    /// The computation.
    pub kind: SignalKind,
}

impl SignalDef {
    /// Creates a signal definition.
    pub fn new(name: impl Into<String>, kind: SignalKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The signal's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trading periods of history required beyond the as-of day itself.
    pub const fn lookback(&self) -> usize {
        match &self.kind {
            SignalKind::TrailingReturn { window } => *window,
            _ => 0,
        }
    }

    /// Columns that must be present in the market data.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut columns = vec!["symbol", "date"];
        match &self.kind {
            SignalKind::TrailingReturn { .. } => columns.push("close"),
            SignalKind::LatestField { column } | SignalKind::InverseField { column } => {
                columns.push(column)
            }
            SignalKind::FieldRatio {
                numerator,
                denominator,
            } => {
                columns.push(numerator);
                columns.push(denominator);
            }
        }
        columns
    }

    /// Computes the raw cross-section for one evaluation day.
    ///
    /// Uses only rows dated at or before `date`. Assets whose inputs are
    /// insufficient are absent from the result; an entirely empty result is
    /// not an error. Missing *columns* are an error — that is malformed data,
    /// not a per-asset gap.
    pub fn compute(&self, data: &MarketData, date: Date) -> Result<CrossSection> {
        for col in self.required_columns() {
            if !data.has_column(col) {
                return Err(RondaError::MissingColumn(col.to_string()));
            }
        }

        let filtered = data.through(date)?;
        if filtered.is_empty() {
            return Ok(CrossSection::new());
        }

        let symbols = filtered.column("symbol")?.as_materialized_series().str()?;
        let mut unique_symbols: Vec<String> = symbols
            .unique()?
            .into_iter()
            .filter_map(|s: Option<&str>| s.map(|s| s.to_string()))
            .collect();
        unique_symbols.sort();

        let mut out = CrossSection::new();
        for symbol in &unique_symbols {
            let symbol_mask = filtered
                .column("symbol")?
                .as_materialized_series()
                .str()?
                .equal(symbol.as_str());
            let symbol_data = filtered.filter(&symbol_mask)?;

            if let Some(value) = self.kind.value_for(&symbol_data)?
                && value.is_finite()
            {
                out.insert(symbol.clone(), value);
            }
        }

        Ok(out)
    }
}

/// A column's values as f64, preserving nulls.
fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

/// Most recent non-null finite value of a column, scanning newest rows first.
fn latest_value(symbol_data: &DataFrame, column: &str) -> Result<Option<f64>> {
    let sorted = symbol_data.sort(
        ["date"],
        SortMultipleOptions::default().with_order_descending(true),
    )?;
    Ok(column_f64(&sorted, column)?
        .into_iter()
        .flatten()
        .find(|v| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
    }

    /// Two symbols, five days of closes, one fundamental column.
    fn sample_data() -> MarketData {
        let mut symbols = Vec::new();
        let mut dates = Vec::new();
        let mut closes = Vec::new();
        let mut roe = Vec::new();

        for t in 0..5 {
            symbols.push("AAA");
            dates.push(day(t));
            closes.push(100.0 + t as f64);
            roe.push(Some(0.10));

            symbols.push("BBB");
            dates.push(day(t));
            closes.push(50.0 + 2.0 * t as f64);
            roe.push(if t == 4 { None } else { Some(0.20) });
        }

        let df = df! {
            "symbol" => symbols,
            "date" => dates,
            "close" => closes,
            "roe" => roe,
        }
        .unwrap();
        MarketData::new(df)
    }

    #[test]
    fn test_trailing_return_simple_convention() {
        let signal = SignalDef::new("ret_2d", SignalKind::TrailingReturn { window: 2 });
        let raw = signal.compute(&sample_data(), day(4)).unwrap();

        // AAA: 104 / 102 - 1; BBB: 58 / 54 - 1
        assert_relative_eq!(raw.get("AAA").unwrap(), 104.0 / 102.0 - 1.0);
        assert_relative_eq!(raw.get("BBB").unwrap(), 58.0 / 54.0 - 1.0);
    }

    #[test]
    fn test_trailing_return_insufficient_history_excludes_asset() {
        let signal = SignalDef::new("ret_10d", SignalKind::TrailingReturn { window: 10 });
        let raw = signal.compute(&sample_data(), day(4)).unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn test_trailing_return_respects_as_of_day() {
        let signal = SignalDef::new("ret_2d", SignalKind::TrailingReturn { window: 2 });
        let raw = signal.compute(&sample_data(), day(2)).unwrap();

        // Only days 0..=2 are visible: AAA is 102 / 100 - 1.
        assert_relative_eq!(raw.get("AAA").unwrap(), 102.0 / 100.0 - 1.0);
    }

    #[test]
    fn test_latest_field_skips_trailing_null() {
        let signal = SignalDef::new("roe", SignalKind::LatestField {
            column: "roe".to_string(),
        });
        let raw = signal.compute(&sample_data(), day(4)).unwrap();

        assert_relative_eq!(raw.get("AAA").unwrap(), 0.10);
        // BBB's day-4 roe is null; the most recent non-null value wins.
        assert_relative_eq!(raw.get("BBB").unwrap(), 0.20);
    }

    #[test]
    fn test_all_null_field_excludes_asset() {
        let df = df! {
            "symbol" => &["CCC", "CCC"],
            "date" => vec![day(0), day(1)],
            "close" => &[10.0, 11.0],
            "peg_ratio" => &[None::<f64>, None::<f64>],
        }
        .unwrap();
        let signal = SignalDef::new("peg", SignalKind::LatestField {
            column: "peg_ratio".to_string(),
        });
        let raw = signal.compute(&MarketData::new(df), day(1)).unwrap();
        assert!(!raw.contains("CCC"));
    }

    #[test]
    fn test_inverse_field_zero_excludes_asset() {
        let df = df! {
            "symbol" => &["AAA", "BBB"],
            "date" => vec![day(0), day(0)],
            "ev_to_ebitda" => &[8.0, 0.0],
        }
        .unwrap();
        let signal = SignalDef::new("ev_ebitda_yield", SignalKind::InverseField {
            column: "ev_to_ebitda".to_string(),
        });
        let raw = signal.compute(&MarketData::new(df), day(0)).unwrap();

        assert_relative_eq!(raw.get("AAA").unwrap(), 0.125);
        assert!(!raw.contains("BBB"));
    }

    #[test]
    fn test_field_ratio() {
        let df = df! {
            "symbol" => &["AAA", "BBB"],
            "date" => vec![day(0), day(0)],
            "enterprise_value" => &[1000.0, 400.0],
            "ebit" => &[100.0, 0.0],
        }
        .unwrap();
        let signal = SignalDef::new("ev_to_ebit", SignalKind::FieldRatio {
            numerator: "enterprise_value".to_string(),
            denominator: "ebit".to_string(),
        });
        let raw = signal.compute(&MarketData::new(df), day(0)).unwrap();

        assert_relative_eq!(raw.get("AAA").unwrap(), 10.0);
        assert!(!raw.contains("BBB"));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let signal = SignalDef::new("pe", SignalKind::LatestField {
            column: "pe_ratio".to_string(),
        });
        let result = signal.compute(&sample_data(), day(4));
        assert!(matches!(result, Err(RondaError::MissingColumn(_))));
    }

    #[test]
    fn test_no_visible_rows_yields_empty_cross_section() {
        let signal = SignalDef::new("ret_2d", SignalKind::TrailingReturn { window: 2 });
        let raw = signal.compute(&sample_data(), day(-10)).unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn test_lookback_and_required_columns() {
        let signal = SignalDef::new("ret_20d", SignalKind::TrailingReturn { window: 20 });
        assert_eq!(signal.lookback(), 20);
        assert!(signal.required_columns().contains(&"close"));

        let signal = SignalDef::new("ev_to_ebit", SignalKind::FieldRatio {
            numerator: "enterprise_value".to_string(),
            denominator: "ebit".to_string(),
        });
        assert_eq!(signal.lookback(), 0);
        assert!(signal.required_columns().contains(&"ebit"));
    }
}
