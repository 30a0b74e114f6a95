//! Signal discovery: categories and metadata for the available signals.

use serde::{Deserialize, Serialize};

/// Signal category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalCategory {
    /// Price momentum signals
    Momentum,
    /// Valuation signals
    Value,
    /// Profitability and balance-sheet quality signals
    Quality,
    /// Growth signals
    Growth,
}

impl SignalCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Momentum => "Price momentum and trend-following signals",
            Self::Value => "Valuation metrics comparing fundamentals to price",
            Self::Quality => "Profitability and balance-sheet strength metrics",
            Self::Growth => "Earnings growth signals",
        }
    }
}

/// Metadata about a signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalInfo {
    /// Unique identifier for the signal
    pub name: &'static str,

    /// Category classification
    pub category: SignalCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Trading periods of history required
    pub lookback: usize,

    /// Whether the signal requires fundamental data
    pub requires_fundamentals: bool,
}

/// Get information about all available signals.
#[must_use]
pub fn available_signals() -> Vec<SignalInfo> {
    vec![
        SignalInfo {
            name: "momentum_1m",
            category: SignalCategory::Momentum,
            description: "One-month trailing simple return",
            lookback: 20,
            requires_fundamentals: false,
        },
        SignalInfo {
            name: "momentum_3m",
            category: SignalCategory::Momentum,
            description: "One-quarter trailing simple return",
            lookback: 63,
            requires_fundamentals: false,
        },
        SignalInfo {
            name: "ev_ebitda_yield",
            category: SignalCategory::Value,
            description: "Reciprocal of enterprise value over EBITDA",
            lookback: 0,
            requires_fundamentals: true,
        },
        SignalInfo {
            name: "ev_to_ebit",
            category: SignalCategory::Value,
            description: "Enterprise value over EBIT",
            lookback: 0,
            requires_fundamentals: true,
        },
        SignalInfo {
            name: "cash_return",
            category: SignalCategory::Value,
            description: "Free cash flow relative to enterprise value",
            lookback: 0,
            requires_fundamentals: true,
        },
        SignalInfo {
            name: "pe_ratio",
            category: SignalCategory::Value,
            description: "Price-to-earnings ratio",
            lookback: 0,
            requires_fundamentals: true,
        },
        SignalInfo {
            name: "peg_ratio",
            category: SignalCategory::Value,
            description: "Price/earnings-to-growth ratio",
            lookback: 0,
            requires_fundamentals: true,
        },
        SignalInfo {
            name: "roe",
            category: SignalCategory::Quality,
            description: "Net income relative to shareholder equity",
            lookback: 0,
            requires_fundamentals: true,
        },
        SignalInfo {
            name: "current_ratio",
            category: SignalCategory::Quality,
            description: "Current assets over current liabilities",
            lookback: 0,
            requires_fundamentals: true,
        },
        SignalInfo {
            name: "net_income_growth",
            category: SignalCategory::Growth,
            description: "Quarter-over-quarter net income growth",
            lookback: 0,
            requires_fundamentals: true,
        },
    ]
}

/// Get all signals in a specific category.
#[must_use]
pub fn signals_by_category(category: &SignalCategory) -> Vec<SignalInfo> {
    available_signals()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific signal by name.
#[must_use]
pub fn get_signal_info(name: &str) -> Option<SignalInfo> {
    available_signals()
        .into_iter()
        .find(|info| info.name == name)
}
