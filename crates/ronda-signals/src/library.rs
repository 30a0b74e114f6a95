//! Named constructors for the canonical signal set.
//!
//! Windows follow the strategy's two momentum horizons: one month (20 trading
//! periods) and one quarter (63 trading periods). Fundamental signals read the
//! latest point-in-time value of their column.

use crate::kind::{SignalDef, SignalKind};

/// Trading periods in the short momentum window (about one month).
pub const MOMENTUM_SHORT_WINDOW: usize = 20;

/// Trading periods in the long momentum window (about one quarter).
pub const MOMENTUM_LONG_WINDOW: usize = 63;

/// One-month trailing return.
#[must_use]
pub fn momentum_short() -> SignalDef {
    SignalDef::new(
        "momentum_1m",
        SignalKind::TrailingReturn {
            window: MOMENTUM_SHORT_WINDOW,
        },
    )
}

/// One-quarter trailing return.
#[must_use]
pub fn momentum_long() -> SignalDef {
    SignalDef::new(
        "momentum_3m",
        SignalKind::TrailingReturn {
            window: MOMENTUM_LONG_WINDOW,
        },
    )
}

/// EBITDA yield: reciprocal of EV/EBITDA, so that cheap is high.
#[must_use]
pub fn ev_ebitda_yield() -> SignalDef {
    SignalDef::new(
        "ev_ebitda_yield",
        SignalKind::InverseField {
            column: "ev_to_ebitda".to_string(),
        },
    )
}

/// Enterprise value over EBIT.
#[must_use]
pub fn ev_to_ebit() -> SignalDef {
    SignalDef::new(
        "ev_to_ebit",
        SignalKind::FieldRatio {
            numerator: "enterprise_value".to_string(),
            denominator: "ebit".to_string(),
        },
    )
}

/// Free cash flow relative to enterprise value.
#[must_use]
pub fn cash_return() -> SignalDef {
    SignalDef::new(
        "cash_return",
        SignalKind::LatestField {
            column: "cash_return".to_string(),
        },
    )
}

/// Return on equity.
#[must_use]
pub fn return_on_equity() -> SignalDef {
    SignalDef::new(
        "roe",
        SignalKind::LatestField {
            column: "roe".to_string(),
        },
    )
}

/// Quarter-over-quarter net income growth.
#[must_use]
pub fn net_income_growth() -> SignalDef {
    SignalDef::new(
        "net_income_growth",
        SignalKind::LatestField {
            column: "net_income_growth".to_string(),
        },
    )
}

/// Price/earnings-to-growth ratio.
#[must_use]
pub fn peg_ratio() -> SignalDef {
    SignalDef::new(
        "peg_ratio",
        SignalKind::LatestField {
            column: "peg_ratio".to_string(),
        },
    )
}

/// Current assets over current liabilities.
#[must_use]
pub fn current_ratio() -> SignalDef {
    SignalDef::new(
        "current_ratio",
        SignalKind::LatestField {
            column: "current_ratio".to_string(),
        },
    )
}

/// Price-to-earnings ratio.
#[must_use]
pub fn pe_ratio() -> SignalDef {
    SignalDef::new(
        "pe_ratio",
        SignalKind::LatestField {
            column: "pe_ratio".to_string(),
        },
    )
}

/// Most recent close, used for reporting rather than scoring.
#[must_use]
pub fn latest_close() -> SignalDef {
    SignalDef::new(
        "close",
        SignalKind::LatestField {
            column: "close".to_string(),
        },
    )
}

/// Look up a signal by name or alias.
pub fn by_name(name: &str) -> Option<SignalDef> {
    match name {
        "momentum_1m" | "mom_1m" | "momentum_short" => Some(momentum_short()),
        "momentum_3m" | "mom_3m" | "momentum_long" => Some(momentum_long()),
        "ev_ebitda_yield" | "ebitda_yield" => Some(ev_ebitda_yield()),
        "ev_to_ebit" | "ev_ebit" => Some(ev_to_ebit()),
        "cash_return" | "fcf_ev" => Some(cash_return()),
        "roe" | "return_on_equity" => Some(return_on_equity()),
        "net_income_growth" | "income_growth" => Some(net_income_growth()),
        "peg_ratio" | "peg" => Some(peg_ratio()),
        "current_ratio" => Some(current_ratio()),
        "pe_ratio" | "pe" => Some(pe_ratio()),
        _ => None,
    }
}
