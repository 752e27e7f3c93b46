//! Process-wide registry counters.

use serde::{Deserialize, Serialize};

/// Running totals of categories constructed and products added, across the
/// whole process.
///
/// Explicit state rather than a global: whoever manages category lifecycles
/// owns an instance and threads it through construction and insertion. Both
/// counters only ever grow; `reset` exists for test isolation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    categories: u64,
    products: u64,
}

impl CatalogStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories ever constructed.
    pub fn categories(&self) -> u64 {
        self.categories
    }

    /// Number of products ever added to any category.
    pub fn products(&self) -> u64 {
        self.products
    }

    /// Record one more constructed category.
    pub fn record_category(&mut self) {
        self.categories += 1;
    }

    /// Record one more successfully added product.
    pub fn record_product(&mut self) {
        self.products += 1;
    }

    /// Drop both counters back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let stats = CatalogStats::new();
        assert_eq!(stats.categories(), 0);
        assert_eq!(stats.products(), 0);
    }

    #[test]
    fn counters_grow_independently() {
        let mut stats = CatalogStats::new();
        stats.record_category();
        stats.record_product();
        stats.record_product();
        assert_eq!(stats.categories(), 1);
        assert_eq!(stats.products(), 2);
    }

    #[test]
    fn reset_drops_both_counters() {
        let mut stats = CatalogStats::new();
        stats.record_category();
        stats.record_product();
        stats.reset();
        assert_eq!(stats, CatalogStats::new());
    }
}
