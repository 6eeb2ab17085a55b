//! Memoized module sets per search scope
//!
//! Each normalized scope key is scanned at most once. Concurrent callers
//! asking for the same uncached key wait on the same cell instead of
//! starting their own scan. Entries are never evicted or refreshed.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::debug;
use typedex_domain::error::Result;
use typedex_domain::{ModuleSet, ScopeKey, SearchScope};

use super::scanner::ModuleScanner;

/// Process-lifetime cache of scanned module sets
pub struct ModuleCache {
    scanner: ModuleScanner,
    entries: DashMap<ScopeKey, Arc<OnceCell<Arc<ModuleSet>>>>,
}

impl ModuleCache {
    /// Empty cache filled by `scanner`
    pub fn new(scanner: ModuleScanner) -> Self {
        Self {
            scanner,
            entries: DashMap::new(),
        }
    }

    /// Scanner used on a miss
    pub fn scanner(&self) -> &ModuleScanner {
        &self.scanner
    }

    /// Module set for `scope`, scanning it on first use
    ///
    /// A failed scan caches nothing; the next call scans again.
    pub fn get_or_load(&self, scope: &SearchScope) -> Result<Arc<ModuleSet>> {
        // Clone the cell out so no shard lock is held while scanning
        let cell = self.entries.entry(scope.key().clone()).or_default().clone();

        if let Some(set) = cell.get() {
            debug!(scope = %scope.key(), "Module cache hit");
            return Ok(Arc::clone(set));
        }

        let outcome = cell
            .get_or_try_init(|| self.scanner.load_all(scope).map(Arc::new))
            .cloned();
        drop(cell);

        if outcome.is_err() {
            // Waiters still holding the cell retry the scan and clean up after themselves
            self.entries.remove_if(scope.key(), |_, cell| {
                cell.get().is_none() && Arc::strong_count(cell) == 1
            });
        }
        outcome
    }

    /// Cached module set for `scope`, without scanning
    pub fn get(&self, scope: &SearchScope) -> Option<Arc<ModuleSet>> {
        self.entries
            .get(scope.key())
            .and_then(|cell| cell.get().cloned())
    }

    /// Number of scopes held, scans in progress included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no scope is held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
