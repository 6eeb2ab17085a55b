//! Resolution counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by the scanner and the caches
#[derive(Debug, Default)]
pub struct ResolutionStats {
    module_scans: AtomicU64,
    type_scans: AtomicU64,
    cache_hits: AtomicU64,
    direct_lookups: AtomicU64,
}

/// Point-in-time copy of [`ResolutionStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Directory scans performed by the module scanner
    pub module_scans: u64,
    /// Full module scans performed to resolve a type name
    pub type_scans: u64,
    /// Type resolutions answered from the cache
    pub cache_hits: u64,
    /// Type resolutions answered by direct catalog lookup
    pub direct_lookups: u64,
}

impl ResolutionStats {
    pub(crate) fn record_module_scan(&self) {
        self.module_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_type_scan(&self) {
        self.type_scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_direct_lookup(&self) {
        self.direct_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Current values
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            module_scans: self.module_scans.load(Ordering::Relaxed),
            type_scans: self.type_scans.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            direct_lookups: self.direct_lookups.load(Ordering::Relaxed),
        }
    }
}
