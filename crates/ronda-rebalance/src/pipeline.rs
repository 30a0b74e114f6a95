//! The daily scoring pipeline.
//!
//! One call to [`run`] takes the day's market data, base universe, and
//! strategy configuration through the whole chain: raw signals → winsorize +
//! z-score → composites → quality screen → long/short selection → alpha map
//! and published report. Every stage is recomputed from scratch; nothing
//! carries over from previous days.

use std::collections::{BTreeMap, BTreeSet};

use ronda_screen::{combine, percentile_band, select, Normalizer, Selection};
use ronda_signals::{library, SignalDef};
use ronda_traits::{CrossSection, Date, MarketData, Result, Symbol, Universe};
use serde::{Deserialize, Serialize};

use crate::config::StrategyConfig;

/// One row of the published report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedRow {
    /// Asset identifier.
    pub symbol: Symbol,
    /// Most recent close at or before the evaluation day.
    pub close: Option<f64>,
    /// Member of the long set.
    pub long: bool,
    /// Member of the short set.
    pub short: bool,
    /// Selection-composite score.
    pub score: f64,
}

/// Everything one day's pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// The evaluation day.
    pub as_of: Date,
    /// Quality composite over its full domain.
    pub quality: CrossSection,
    /// Selection composite over its full domain.
    pub selection_score: CrossSection,
    /// Base-universe members inside the quality eligibility band.
    pub eligible: BTreeSet<Symbol>,
    /// Long and short candidate sets.
    pub picks: Selection,
    /// Selection composite restricted to the chosen assets; the score map the
    /// optimizer maximizes.
    pub alpha: CrossSection,
    /// Report rows for base ∩ published band ∩ chosen assets.
    pub published: Vec<PublishedRow>,
}

/// Run the full pipeline for one evaluation day.
///
/// Normalization statistics are computed over each signal's active set — every
/// asset that has the raw value that day — while the screening percentiles are
/// computed over base-universe members only. A signal appearing in both
/// composites is computed and normalized once.
///
/// # Errors
///
/// Configuration problems (invalid bands or winsor bounds, counts exceeding
/// the rankable population, empty input lists) are fatal; malformed market
/// data surfaces as column/Polars errors. A day with no eligible assets is not
/// an error.
pub fn run(
    data: &MarketData,
    universe: &dyn Universe,
    config: &StrategyConfig,
    as_of: Date,
) -> Result<PipelineOutput> {
    config.validate()?;
    let normalizer = Normalizer::new(config.winsor_lo, config.winsor_hi)?;
    let base = universe.members(as_of);

    let mut normalized: BTreeMap<String, CrossSection> = BTreeMap::new();
    for def in config
        .quality_inputs
        .iter()
        .chain(config.selection_inputs.iter())
    {
        if !normalized.contains_key(def.name()) {
            let raw = def.compute(data, as_of)?;
            normalized.insert(def.name().to_string(), normalizer.normalize(&raw));
        }
    }

    let gather = |defs: &[SignalDef]| -> Vec<CrossSection> {
        defs.iter().map(|d| normalized[d.name()].clone()).collect()
    };
    let quality = combine(&gather(&config.quality_inputs))?;
    let selection_score = combine(&gather(&config.selection_inputs))?;

    let eligible = percentile_band(&quality, &base, config.quality_band)?;
    let picks = select(
        &eligible,
        &selection_score,
        config.long_count(),
        config.short_count(),
    )?;
    let chosen = picks.union();
    let alpha = selection_score.restrict(&chosen);

    let publish_set = percentile_band(&quality, &base, config.publish_band)?;
    let closes = library::latest_close().compute(data, as_of)?;
    let published = publish_set
        .intersection(&chosen)
        .map(|symbol| PublishedRow {
            symbol: symbol.clone(),
            close: closes.get(symbol),
            long: picks.longs.contains(symbol),
            short: picks.shorts.contains(symbol),
            score: selection_score.get(symbol).unwrap_or(0.0),
        })
        .collect();

    Ok(PipelineOutput {
        as_of,
        quality,
        selection_score,
        eligible,
        picks,
        alpha,
        published,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::prelude::*;
    use ronda_traits::{RondaError, StaticUniverse};

    const N_ASSETS: usize = 20;
    const N_DAYS: i64 = 70;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
    }

    fn asset(i: usize) -> String {
        format!("A{i:02}")
    }

    /// Twenty assets whose every raw signal is strictly increasing in the
    /// asset index: higher index means faster price growth and larger
    /// fundamentals, so composite rank equals index rank.
    fn synthetic_data(null_cash_return_for: Option<&str>) -> MarketData {
        let mut symbols: Vec<String> = Vec::new();
        let mut dates: Vec<NaiveDate> = Vec::new();
        let mut closes: Vec<f64> = Vec::new();
        let mut ev_to_ebitda: Vec<f64> = Vec::new();
        let mut enterprise_value: Vec<f64> = Vec::new();
        let mut ebit: Vec<f64> = Vec::new();
        let mut cash_return: Vec<Option<f64>> = Vec::new();
        let mut roe: Vec<f64> = Vec::new();
        let mut net_income_growth: Vec<f64> = Vec::new();
        let mut peg_ratio: Vec<f64> = Vec::new();
        let mut current_ratio: Vec<f64> = Vec::new();
        let mut pe_ratio: Vec<f64> = Vec::new();

        for i in 0..N_ASSETS {
            let symbol = asset(i);
            let level = (i + 1) as f64;
            for t in 0..N_DAYS {
                symbols.push(symbol.clone());
                dates.push(day(t));
                closes.push(100.0 * (1.0 + 0.001 * i as f64).powi(t as i32));
                // Inverse input so ev_ebitda_yield comes out increasing in i.
                ev_to_ebitda.push(1.0 / level);
                enterprise_value.push(100.0 * level);
                ebit.push(100.0);
                cash_return.push(if null_cash_return_for == Some(symbol.as_str()) {
                    None
                } else {
                    Some(level)
                });
                roe.push(level);
                net_income_growth.push(level);
                peg_ratio.push(level);
                current_ratio.push(level);
                pe_ratio.push(level);
            }
        }

        let df = df! {
            "symbol" => symbols,
            "date" => dates,
            "close" => closes,
            "ev_to_ebitda" => ev_to_ebitda,
            "enterprise_value" => enterprise_value,
            "ebit" => ebit,
            "cash_return" => cash_return,
            "roe" => roe,
            "net_income_growth" => net_income_growth,
            "peg_ratio" => peg_ratio,
            "current_ratio" => current_ratio,
            "pe_ratio" => pe_ratio,
        }
        .unwrap();
        MarketData::new(df)
    }

    fn full_universe() -> StaticUniverse {
        StaticUniverse::new((0..N_ASSETS).map(asset))
    }

    fn small_config() -> StrategyConfig {
        StrategyConfig {
            total_positions: 4,
            ..Default::default()
        }
    }

    fn set(indices: &[usize]) -> BTreeSet<Symbol> {
        indices.iter().map(|&i| asset(i)).collect()
    }

    #[test]
    fn test_end_to_end_known_selection() {
        // With 20 monotone assets, 10%/90% winsorization ties the three
        // lowest and the two highest composite values; the [5, 45] band then
        // keeps exactly assets 0..=8 and the ranking picks the edges of that
        // group.
        let data = synthetic_data(None);
        let output = run(&data, &full_universe(), &small_config(), day(N_DAYS - 1)).unwrap();

        assert_eq!(output.eligible, set(&[0, 1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(output.picks.longs, set(&[7, 8]));
        assert_eq!(output.picks.shorts, set(&[1, 2]));

        assert_eq!(output.alpha.domain(), set(&[1, 2, 7, 8]));
        for symbol in output.alpha.symbols() {
            assert_eq!(
                output.alpha.get(symbol),
                output.selection_score.get(symbol)
            );
        }
    }

    #[test]
    fn test_published_report_is_narrow_band_of_chosen() {
        // The [0, 30] published band keeps assets 0..=5, so only the two
        // shorts survive the published screen.
        let data = synthetic_data(None);
        let output = run(&data, &full_universe(), &small_config(), day(N_DAYS - 1)).unwrap();

        let symbols: Vec<&str> = output
            .published
            .iter()
            .map(|row| row.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["A01", "A02"]);

        for row in &output.published {
            assert!(row.short);
            assert!(!row.long);
            assert!(row.close.is_some());
            assert_eq!(Some(row.score), output.selection_score.get(&row.symbol));
        }
    }

    #[test]
    fn test_selection_invariants() {
        let data = synthetic_data(None);
        let output = run(&data, &full_universe(), &small_config(), day(N_DAYS - 1)).unwrap();
        let base = full_universe().members(day(N_DAYS - 1));

        assert!(output.picks.longs.is_disjoint(&output.picks.shorts));
        assert!(output.picks.longs.len() <= small_config().long_count());
        assert!(output.picks.shorts.len() <= small_config().short_count());
        assert!(output.picks.union().is_subset(&output.eligible));
        assert!(output.eligible.is_subset(&base));
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let data = synthetic_data(None);
        let universe = full_universe();
        let config = small_config();

        let first = run(&data, &universe, &config, day(N_DAYS - 1)).unwrap();
        let second = run(&data, &universe, &config, day(N_DAYS - 1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_quality_input_excludes_asset() {
        // A05 has no cash_return anywhere: it drops out of the quality
        // composite and can never be eligible, whatever its other values.
        let data = synthetic_data(Some("A05"));
        let output = run(&data, &full_universe(), &small_config(), day(N_DAYS - 1)).unwrap();

        assert!(!output.quality.contains("A05"));
        assert!(!output.eligible.contains("A05"));
        // Its selection inputs are all present, so it still has a selection
        // score — eligibility is what gates it out.
        assert!(output.selection_score.contains("A05"));
    }

    #[test]
    fn test_counts_exceeding_population_fail() {
        let data = synthetic_data(None);
        let config = StrategyConfig {
            total_positions: 40,
            ..Default::default()
        };

        let result = run(&data, &full_universe(), &config, day(N_DAYS - 1));
        assert!(matches!(result, Err(RondaError::Configuration(_))));
    }

    #[test]
    fn test_empty_universe_is_a_quiet_day() {
        let data = synthetic_data(None);
        let universe = StaticUniverse::default();
        let output = run(&data, &universe, &small_config(), day(N_DAYS - 1)).unwrap();

        assert!(output.eligible.is_empty());
        assert!(output.picks.is_empty());
        assert!(output.alpha.is_empty());
        assert!(output.published.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_before_data_access() {
        let data = MarketData::new(DataFrame::default());
        let config = StrategyConfig {
            total_positions: 0,
            ..Default::default()
        };

        let result = run(&data, &full_universe(), &config, day(0));
        assert!(matches!(result, Err(RondaError::Configuration(_))));
    }

    #[test]
    fn test_insufficient_history_shrinks_domains_quietly() {
        // On day 30 the quarter momentum has no qualifying asset, so the
        // selection composite is empty and nothing is picked.
        let data = synthetic_data(None);
        let output = run(&data, &full_universe(), &small_config(), day(30)).unwrap();

        assert!(output.selection_score.is_empty());
        assert!(output.picks.is_empty());
        // Quality needs no price history and is unaffected.
        assert_eq!(output.quality.len(), N_ASSETS);
    }
}
