//! The daily tradable-universe predicate.
//!
//! Universe construction (liquidity screens, listing filters, index membership)
//! happens in an external service; the engine only asks which assets are
//! tradable on a given day and treats the answer as opaque.

use std::collections::BTreeSet;

use crate::types::{Date, Symbol};

/// An externally supplied tradable-universe predicate, varying daily.
pub trait Universe: Send + Sync {
    /// Assets tradable on the given day.
    fn members(&self, date: Date) -> BTreeSet<Symbol>;

    /// Whether a single asset is tradable on the given day.
    fn contains(&self, symbol: &str, date: Date) -> bool {
        self.members(date).contains(symbol)
    }
}

/// A fixed universe, identical on every day.
///
/// Used by tests and the CLI, where the membership service is out of the
/// picture and the universe is simply the set of symbols loaded.
#[derive(Debug, Clone, Default)]
pub struct StaticUniverse {
    members: BTreeSet<Symbol>,
}

impl StaticUniverse {
    /// Creates a static universe from any collection of symbols.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            members: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Universe for StaticUniverse {
    fn members(&self, _date: Date) -> BTreeSet<Symbol> {
        self.members.clone()
    }

    fn contains(&self, symbol: &str, _date: Date) -> bool {
        self.members.contains(symbol)
    }
}
