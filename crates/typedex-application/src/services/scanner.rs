//! Module scanner
//!
//! Walks a search scope for module files and loads each one from the
//! catalog by logical name. A module that fails to load is recorded as a
//! failed handle and never aborts the scan.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use typedex_domain::constants::{
    ARTIFACT_NAME_SEPARATOR, MODULE_NAME_SEPARATOR, PREFIXED_LIBRARY_EXTENSIONS,
    SHARED_LIBRARY_PREFIX,
};
use typedex_domain::error::{Error, Result};
use typedex_domain::ports::ModuleCatalog;
use typedex_domain::{ModuleHandle, ModuleSet, ScopeKey, SearchScope};
use walkdir::WalkDir;

use super::stats::ResolutionStats;

/// Scanner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerOptions {
    /// File extensions treated as modules, without the leading dot
    pub extensions: Vec<String>,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Maximum walk depth below the scope root, unlimited when `None`
    pub max_depth: Option<usize>,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            extensions: vec![std::env::consts::DLL_EXTENSION.to_string()],
            follow_links: false,
            max_depth: None,
        }
    }
}

impl ScannerOptions {
    /// Replace the module extensions
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Follow symbolic links
    #[must_use]
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Limit walk depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    fn is_module_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Map a module file to the logical name the catalog knows it by
///
/// `plugins/libzoo-animals.so` becomes `zoo_animals`, following the way
/// cargo names library artifacts after their crate.
pub fn logical_module_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let name = if PREFIXED_LIBRARY_EXTENSIONS.contains(&extension.as_str()) {
        stem.strip_prefix(SHARED_LIBRARY_PREFIX)
            .filter(|rest| !rest.is_empty())
            .unwrap_or(stem)
    } else {
        stem
    };

    (!name.is_empty()).then(|| {
        name.chars()
            .map(|c| if c == ARTIFACT_NAME_SEPARATOR { MODULE_NAME_SEPARATOR } else { c })
            .collect()
    })
}

/// Enumerates and loads the modules of a search scope
pub struct ModuleScanner {
    catalog: Arc<dyn ModuleCatalog>,
    options: ScannerOptions,
    process_scope: Option<ScopeKey>,
    stats: Arc<ResolutionStats>,
}

impl ModuleScanner {
    /// Scanner loading from `catalog`
    pub fn new(catalog: Arc<dyn ModuleCatalog>, options: ScannerOptions) -> Self {
        Self {
            catalog,
            options,
            process_scope: SearchScope::process().ok().map(|s| s.key().clone()),
            stats: Arc::new(ResolutionStats::default()),
        }
    }

    /// Share counters with other services
    #[must_use]
    pub fn with_stats(mut self, stats: Arc<ResolutionStats>) -> Self {
        self.stats = stats;
        self
    }

    /// Catalog modules are loaded from
    pub fn catalog(&self) -> &Arc<dyn ModuleCatalog> {
        &self.catalog
    }

    /// Scanner settings
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Shared counters
    pub fn stats(&self) -> &Arc<ResolutionStats> {
        &self.stats
    }

    /// Load every module under `scope`
    ///
    /// The process scope also contains every module resident in the
    /// process, listed first. Each logical name is loaded once per scan.
    pub fn load_all(&self, scope: &SearchScope) -> Result<ModuleSet> {
        if !scope.root().is_dir() {
            return Err(Error::invalid_argument(format!(
                "search scope {} is not a directory",
                scope.root().display()
            )));
        }

        self.stats.record_module_scan();
        let started = Instant::now();
        let mut seen = HashSet::new();
        let mut handles = Vec::new();

        if self.process_scope.as_ref() == Some(scope.key()) {
            let origin = std::env::current_exe().unwrap_or_else(|_| scope.root().to_path_buf());
            for name in self.catalog.resident_modules() {
                if seen.insert(name.clone()) {
                    handles.push(self.load_one(&name, &origin));
                }
            }
        }

        let mut walker = WalkDir::new(scope.root())
            .follow_links(self.options.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(scope = %scope.key(), error = %e, "Skipping unreadable entry during module scan");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.options.is_module_file(entry.path()) {
                continue;
            }
            let Some(name) = logical_module_name(entry.path()) else {
                continue;
            };
            if !seen.insert(name.clone()) {
                debug!(module = %name, origin = %entry.path().display(), "Module already discovered in this scope");
                continue;
            }
            handles.push(self.load_one(&name, entry.path()));
        }

        let set = ModuleSet::new(scope.key().clone(), handles);
        info!(
            scope = %scope.key(),
            loaded = set.loaded_count(),
            failed = set.failed_count(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Module scan completed"
        );
        Ok(set)
    }

    fn load_one(&self, name: &str, origin: &Path) -> ModuleHandle {
        match self.catalog.load(name) {
            Ok(module) => {
                debug!(module = %name, origin = %origin.display(), "Module loaded");
                ModuleHandle::loaded(name, origin, module)
            }
            Err(e) => {
                warn!(module = %name, origin = %origin.display(), error = %e, "Module failed to load, excluded from scope");
                ModuleHandle::failed(name, origin, e.to_string())
            }
        }
    }
}
