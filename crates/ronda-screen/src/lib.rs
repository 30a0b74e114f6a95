//! The cross-sectional engine: normalization, composite scoring, percentile
//! screening, and long/short selection.
//!
//! Every operation here works on one day's [`CrossSection`] at a time and is a
//! pure function of its inputs: statistics are computed over the day's active
//! set only, domains are tracked explicitly (an asset missing an input is
//! excluded, never zero-filled), and all iteration happens in symbol order so
//! two runs on identical inputs are bit-identical.
//!
//! [`CrossSection`]: ronda_traits::CrossSection

mod composite;
mod normalize;
mod screen;
mod select;

// Re-export main types
pub use composite::combine;
pub use normalize::Normalizer;
pub use screen::{percentile_band, PercentileBand};
pub use select::{select, Selection};
