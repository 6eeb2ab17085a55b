//! Type name resolution with memoization
//!
//! Lookup order for a qualified name:
//!
//! 1. cache hit by exact name
//! 2. a scope override is loaded into the module cache first
//! 3. direct catalog lookup, no scanning
//! 4. scan of every module in scope, exact name match only
//!
//! Successful resolutions are cached for the life of the cache; failed ones
//! leave nothing behind.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};
use typedex_domain::error::{Error, Result};
use typedex_domain::ports::ModuleCatalog;
use typedex_domain::{SearchScope, TypeDescriptor};

use super::module_cache::ModuleCache;
use super::stats::ResolutionStats;

/// Per-call resolution settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Search scope override; `None` or blank means the default scope
    pub scope: Option<String>,
    /// Allow non-public types to resolve
    pub include_non_public: bool,
}

impl ResolveOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `scope` instead of the default scope
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Allow or deny non-public types
    #[must_use]
    pub fn with_non_public(mut self, include_non_public: bool) -> Self {
        self.include_non_public = include_non_public;
        self
    }

    /// Explicit scope, when one was given
    pub fn scope_override(&self) -> Result<Option<SearchScope>> {
        match self.scope.as_deref() {
            Some(raw) if !raw.trim().is_empty() => SearchScope::parse(raw).map(Some),
            _ => Ok(None),
        }
    }

    /// Scope to search, falling back to `default`
    pub fn search_scope(&self, default: &SearchScope) -> Result<SearchScope> {
        SearchScope::or_default(self.scope.as_deref(), default)
    }

    /// True when `descriptor` is visible under these options
    pub fn permits(&self, descriptor: &TypeDescriptor) -> bool {
        self.include_non_public || descriptor.is_public()
    }
}

/// Process-lifetime cache of resolved type names
pub struct TypeCache {
    catalog: Arc<dyn ModuleCatalog>,
    modules: Arc<ModuleCache>,
    default_scope: SearchScope,
    entries: DashMap<String, Arc<OnceCell<Arc<TypeDescriptor>>>>,
    stats: Arc<ResolutionStats>,
}

impl TypeCache {
    /// Empty cache resolving through `modules` and its catalog
    pub fn new(modules: Arc<ModuleCache>, default_scope: SearchScope) -> Self {
        Self {
            catalog: Arc::clone(modules.scanner().catalog()),
            stats: Arc::clone(modules.scanner().stats()),
            modules,
            default_scope,
            entries: DashMap::new(),
        }
    }

    /// Scope searched when a call does not name one
    pub fn default_scope(&self) -> &SearchScope {
        &self.default_scope
    }

    /// Resolve `qualified_name` to a concrete type
    pub fn resolve(&self, qualified_name: &str, options: &ResolveOptions) -> Result<Arc<TypeDescriptor>> {
        if qualified_name.trim().is_empty() {
            return Err(Error::invalid_argument("type name cannot be empty"));
        }
        let scope_override = options.scope_override()?;

        if let Some(descriptor) = self.get(qualified_name) {
            debug!(type_name = qualified_name, "Type cache hit");
            self.stats.record_cache_hit();
            return Self::check_visibility(descriptor, options);
        }

        let cell = self
            .entries
            .entry(qualified_name.to_string())
            .or_default()
            .clone();

        let outcome = cell
            .get_or_try_init(|| self.discover(qualified_name, scope_override.as_ref()))
            .cloned();
        drop(cell);

        match outcome {
            Ok(descriptor) => Self::check_visibility(descriptor, options),
            Err(e) => {
                // A waiter still holding the cell may yet fill it; the last holder removes it
                self.entries.remove_if(qualified_name, |_, cell| {
                    cell.get().is_none() && Arc::strong_count(cell) == 1
                });
                Err(e)
            }
        }
    }

    /// Cached descriptor for `qualified_name`, without resolving
    pub fn get(&self, qualified_name: &str) -> Option<Arc<TypeDescriptor>> {
        self.entries
            .get(qualified_name)
            .and_then(|cell| cell.get().cloned())
    }

    /// Number of names held, resolutions in progress included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no name is held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn discover(&self, name: &str, scope_override: Option<&SearchScope>) -> Result<Arc<TypeDescriptor>> {
        if let Some(scope) = scope_override {
            self.modules.get_or_load(scope)?;
        }

        if let Some(descriptor) = self
            .catalog
            .find_type(name)
            .and_then(TypeDescriptor::from_registration)
        {
            debug!(type_name = name, "Type resolved by direct lookup");
            self.stats.record_direct_lookup();
            return Ok(Arc::new(descriptor));
        }

        let scope = scope_override.unwrap_or(&self.default_scope);
        self.stats.record_type_scan();
        let set = self.modules.get_or_load(scope)?;

        for module in set.loaded().filter_map(|h| h.module()) {
            let types = match module.types() {
                Ok(types) => types,
                Err(e) => {
                    warn!(module = module.name(), error = %e, "Skipping module whose types cannot be enumerated");
                    continue;
                }
            };
            if let Some(descriptor) = types
                .into_iter()
                .filter(|t| t.name == name)
                .find_map(TypeDescriptor::from_registration)
            {
                debug!(type_name = name, module = module.name(), "Type resolved by module scan");
                return Ok(Arc::new(descriptor));
            }
        }

        debug!(type_name = name, scope = %scope.key(), "Type not found");
        Err(Error::type_not_found(name))
    }

    fn check_visibility(
        descriptor: Arc<TypeDescriptor>,
        options: &ResolveOptions,
    ) -> Result<Arc<TypeDescriptor>> {
        if options.permits(&descriptor) {
            Ok(descriptor)
        } else {
            debug!(type_name = descriptor.name(), "Non-public type hidden from caller");
            Err(Error::type_not_found(descriptor.name()))
        }
    }
}
