//! Module handles and scan results

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::scope::ScopeKey;
use crate::ports::LoadedModule;

/// Load status of a discovered module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadStatus {
    /// Module is in the catalog and its types can be enumerated
    Loaded,
    /// Module could not be loaded
    Failed,
}

enum HandleState {
    Loaded(Arc<dyn LoadedModule>),
    Failed(String),
}

/// A module discovered under a search scope
pub struct ModuleHandle {
    name: String,
    origin: PathBuf,
    state: HandleState,
}

impl ModuleHandle {
    /// Handle for a module that loaded
    pub fn loaded(name: impl Into<String>, origin: impl Into<PathBuf>, module: Arc<dyn LoadedModule>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            state: HandleState::Loaded(module),
        }
    }

    /// Handle for a module that failed to load
    pub fn failed(name: impl Into<String>, origin: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            state: HandleState::Failed(reason.into()),
        }
    }

    /// Logical module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File the module was discovered from
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Load status
    pub fn status(&self) -> LoadStatus {
        match self.state {
            HandleState::Loaded(_) => LoadStatus::Loaded,
            HandleState::Failed(_) => LoadStatus::Failed,
        }
    }

    /// True when the module loaded
    pub fn is_loaded(&self) -> bool {
        self.status() == LoadStatus::Loaded
    }

    /// Loaded module, if any
    pub fn module(&self) -> Option<&Arc<dyn LoadedModule>> {
        match &self.state {
            HandleState::Loaded(module) => Some(module),
            HandleState::Failed(_) => None,
        }
    }

    /// Failure reason, if the module failed to load
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.state {
            HandleState::Loaded(_) => None,
            HandleState::Failed(reason) => Some(reason),
        }
    }
}

impl fmt::Debug for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandle")
            .field("name", &self.name)
            .field("origin", &self.origin)
            .field("status", &self.status())
            .field("failure", &self.failure_reason())
            .finish()
    }
}

/// Failed module, as reported in a [`ScanSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleFailure {
    /// Logical module name
    pub module: String,
    /// File the module was discovered from
    pub origin: PathBuf,
    /// Why loading failed
    pub reason: String,
}

/// Counts and failures of one scan, serializable for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Scope the scan covered
    pub scope: ScopeKey,
    /// Modules that loaded
    pub loaded: usize,
    /// Modules that failed to load
    pub failures: Vec<ModuleFailure>,
}

/// Every module discovered under one scope, in discovery order
#[derive(Debug)]
pub struct ModuleSet {
    scope: ScopeKey,
    handles: Vec<ModuleHandle>,
}

impl ModuleSet {
    /// Set for `scope`
    pub fn new(scope: ScopeKey, handles: Vec<ModuleHandle>) -> Self {
        Self { scope, handles }
    }

    /// Scope the set was scanned from
    pub fn scope(&self) -> &ScopeKey {
        &self.scope
    }

    /// All handles, loaded and failed
    pub fn handles(&self) -> &[ModuleHandle] {
        &self.handles
    }

    /// Handles that loaded
    pub fn loaded(&self) -> impl Iterator<Item = &ModuleHandle> {
        self.handles.iter().filter(|h| h.is_loaded())
    }

    /// Handles that failed
    pub fn failed(&self) -> impl Iterator<Item = &ModuleHandle> {
        self.handles.iter().filter(|h| !h.is_loaded())
    }

    /// Number of loaded modules
    pub fn loaded_count(&self) -> usize {
        self.loaded().count()
    }

    /// Number of failed modules
    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// Diagnostic summary
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            scope: self.scope.clone(),
            loaded: self.loaded_count(),
            failures: self
                .failed()
                .map(|h| ModuleFailure {
                    module: h.name.clone(),
                    origin: h.origin.clone(),
                    reason: h.failure_reason().unwrap_or_default().to_string(),
                })
                .collect(),
        }
    }
}
