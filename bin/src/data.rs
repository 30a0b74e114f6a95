//! Data loading utilities for the ronda CLI.
//!
//! The engine treats market-data retrieval as an external collaborator; here
//! the collaborator is a CSV file with `symbol` and `date` columns plus
//! whatever price and fundamental columns the configured signals need.

use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::*;
use ronda_traits::{MarketData, RondaError};

// Offset between days-from-CE (chrono) and days-from-Unix-epoch (polars Date).
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Load market data from a CSV file.
pub(crate) fn load_market_data(path: &Path) -> Result<MarketData, RondaError> {
    let df = CsvReadOptions::default()
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    for required in ["symbol", "date"] {
        if !df.get_column_names().iter().any(|c| c.as_str() == required) {
            return Err(RondaError::MissingColumn(required.to_string()));
        }
    }

    Ok(MarketData::new(df))
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate, RondaError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| RondaError::InvalidData(format!("Invalid date format: {}", e)))
}

/// The most recent date present in the data.
pub(crate) fn latest_date(data: &MarketData) -> Result<NaiveDate, RondaError> {
    data.data()
        .column("date")?
        .as_materialized_series()
        .date()?
        .max()
        .and_then(|d: i32| NaiveDate::from_num_days_from_ce_opt(d + EPOCH_DAYS_FROM_CE))
        .ok_or_else(|| RondaError::InvalidData("no dates in market data".to_string()))
}
