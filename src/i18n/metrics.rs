//! Catalog lookup metrics.
//!
//! Counts every catalog lookup and every lookup that found no string, so a
//! missing translation key shows up on the preview server's health route
//! instead of only as an empty spot on the page.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a `LocaleCatalog`.
#[derive(Debug, Default)]
pub struct CatalogMetrics {
    lookups: AtomicUsize,
    misses: AtomicUsize,
}

impl CatalogMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup that found a string.
    pub fn record_hit(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup for a key the locale does not define.
    pub fn record_miss(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let misses = self.misses();
        let hit_rate = if lookups > 0 {
            ((lookups - misses) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            misses,
            hit_rate,
        }
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub misses: usize,
    /// Percentage of lookups that found a string (0.0 to 100.0)
    pub hit_rate: f64,
}
