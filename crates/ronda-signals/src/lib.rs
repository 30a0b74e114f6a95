//! Raw signal implementations for the ronda stock-selection engine.
//!
//! A signal is a named scalar function of one asset's history, evaluated as of
//! an explicit day using only data at or before that day. Signals here produce
//! *raw* values — winsorization and z-scoring happen downstream in
//! `ronda-screen`, over the full cross-section of a single day.
//!
//! Rather than a trait hierarchy, the library is a tagged enumeration of signal
//! kinds with one uniform compute signature:
//! - Trailing return over a configurable window of closes
//! - Latest value of a fundamental column
//! - Reciprocal of the latest value
//! - Ratio of the latest values of two columns
//!
//! # Example
//!
//! ```ignore
//! use ronda_signals::library;
//!
//! let momentum = library::momentum_short();
//! let raw = momentum.compute(&market_data, date)?;
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod kind;
pub mod library;
pub mod registry;

// Re-export key types
pub use kind::{SignalDef, SignalKind};
pub use registry::{SignalCategory, SignalInfo};
