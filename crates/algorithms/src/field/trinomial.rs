//! Registry of irreducible trinomials x^m + x^t + 2
//!
//! A `TrinomialTable` maps an extension degree `m` to the middle exponent
//! `t` of the reduction polynomial. The standard table is loaded from
//! `tatefield-params`; callers may register further pairs.

use alloc::collections::BTreeMap;

use tatefield_params::pairing::gf3m::IRREDUCIBLE_TRINOMIALS;

use crate::error::{validate, Error, Result};

/// Degree → middle-exponent mapping for reduction trinomials
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrinomialTable {
    entries: BTreeMap<usize, usize>,
}

impl TrinomialTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of known irreducible trinomials
    pub fn standard() -> Self {
        let entries = IRREDUCIBLE_TRINOMIALS.iter().copied().collect();
        Self { entries }
    }

    /// Register (or replace) the trinomial for degree `m`
    ///
    /// Only the shape `m >= 2`, `0 < t < m` is checked. Irreducibility is
    /// the caller's responsibility: ring operations are correct for any
    /// trinomial, inversion is only meaningful when it is irreducible.
    pub fn register(&mut self, degree: usize, middle: usize) -> Result<Option<usize>> {
        validate::trinomial(degree, middle)?;
        Ok(self.entries.insert(degree, middle))
    }

    /// Middle exponent for degree `m`
    pub fn middle_exponent(&self, degree: usize) -> Result<usize> {
        self.entries
            .get(&degree)
            .copied()
            .ok_or(Error::UnsupportedDegree { degree })
    }

    /// Whether a trinomial is registered for degree `m`
    pub fn contains(&self, degree: usize) -> bool {
        self.entries.contains_key(&degree)
    }

    /// Registered `(m, t)` pairs in ascending degree order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().map(|(&m, &t)| (m, t))
    }

    /// Number of registered degrees
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
