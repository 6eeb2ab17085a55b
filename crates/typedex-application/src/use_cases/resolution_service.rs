//! Type Resolution Service Use Case
//!
//! The four operations offered to hosting code: resolve a type by name,
//! find the implementers of a capability, create one instance, create one
//! instance of every implementer. Owns the shared caches; callers that want
//! isolated state build their own service.

use std::sync::Arc;

use typedex_domain::error::Result;
use typedex_domain::ports::ModuleCatalog;
use typedex_domain::{
    Capability, CapabilityId, ConstructorArgs, Instance, ScanSummary, SearchScope, TypeDescriptor,
};

use crate::services::{
    FactoryOptions, InstanceFactory, ModuleCache, ModuleScanner, ResolutionStats, ResolveOptions,
    ScannerOptions, StatsSnapshot, TypeCache, TypeIndex,
};

/// Builder for [`TypeResolutionService`]
pub struct TypeResolutionServiceBuilder {
    catalog: Arc<dyn ModuleCatalog>,
    scanner_options: ScannerOptions,
    factory_options: FactoryOptions,
    default_scope: Option<SearchScope>,
    include_non_public: bool,
}

impl TypeResolutionServiceBuilder {
    /// Builder loading modules from `catalog`
    pub fn new(catalog: Arc<dyn ModuleCatalog>) -> Self {
        Self {
            catalog,
            scanner_options: ScannerOptions::default(),
            factory_options: FactoryOptions::default(),
            default_scope: None,
            include_non_public: false,
        }
    }

    /// Scanner settings
    #[must_use]
    pub fn with_scanner_options(mut self, options: ScannerOptions) -> Self {
        self.scanner_options = options;
        self
    }

    /// Factory settings
    #[must_use]
    pub fn with_factory_options(mut self, options: FactoryOptions) -> Self {
        self.factory_options = options;
        self
    }

    /// Scope used when a call names none; the process directory otherwise
    #[must_use]
    pub fn with_default_scope(mut self, scope: SearchScope) -> Self {
        self.default_scope = Some(scope);
        self
    }

    /// Let non-public types resolve by default
    #[must_use]
    pub fn with_include_non_public(mut self, include_non_public: bool) -> Self {
        self.include_non_public = include_non_public;
        self
    }

    /// Build the service with fresh, empty caches
    pub fn build(self) -> Result<TypeResolutionService> {
        let default_scope = match self.default_scope {
            Some(scope) => scope,
            None => SearchScope::process()?,
        };

        let stats = Arc::new(ResolutionStats::default());
        let scanner =
            ModuleScanner::new(self.catalog, self.scanner_options).with_stats(Arc::clone(&stats));
        let modules = Arc::new(ModuleCache::new(scanner));
        let types = Arc::new(TypeCache::new(Arc::clone(&modules), default_scope));

        Ok(TypeResolutionService::from_parts(
            modules,
            types,
            self.factory_options,
            self.include_non_public,
        ))
    }
}

/// Runtime type resolution and instantiation
pub struct TypeResolutionService {
    modules: Arc<ModuleCache>,
    types: Arc<TypeCache>,
    index: Arc<TypeIndex>,
    factory: InstanceFactory,
    include_non_public: bool,
}

impl TypeResolutionService {
    /// Builder over `catalog`
    pub fn builder(catalog: Arc<dyn ModuleCatalog>) -> TypeResolutionServiceBuilder {
        TypeResolutionServiceBuilder::new(catalog)
    }

    /// Service over existing caches
    ///
    /// `types` must resolve through `modules`, so that both caches and the
    /// counters are shared.
    pub fn from_parts(
        modules: Arc<ModuleCache>,
        types: Arc<TypeCache>,
        factory_options: FactoryOptions,
        include_non_public: bool,
    ) -> Self {
        let index = Arc::new(TypeIndex::new(Arc::clone(&modules)));
        let factory = InstanceFactory::new(Arc::clone(&types), Arc::clone(&index), factory_options);
        Self {
            modules,
            types,
            index,
            factory,
            include_non_public,
        }
    }

    /// Options for a call with an optional scope override
    pub fn options(&self, scope: Option<&str>) -> ResolveOptions {
        ResolveOptions {
            scope: scope.map(str::to_string),
            include_non_public: self.include_non_public,
        }
    }

    /// Resolve a fully-qualified type name
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank name or malformed scope, `TypeNotFound`
    /// when no loaded module declares a concrete type of exactly that name.
    pub fn resolve_type(&self, name: &str, scope: Option<&str>) -> Result<Arc<TypeDescriptor>> {
        self.resolve_type_with(name, &self.options(scope))
    }

    /// [`resolve_type`](Self::resolve_type) with explicit options
    pub fn resolve_type_with(
        &self,
        name: &str,
        options: &ResolveOptions,
    ) -> Result<Arc<TypeDescriptor>> {
        self.types.resolve(name, options)
    }

    /// Concrete implementers of `capability`, in discovery order
    pub fn find_implementations(
        &self,
        capability: &CapabilityId,
        scope: Option<&str>,
    ) -> Result<Vec<Arc<TypeDescriptor>>> {
        self.find_implementations_with(capability, &self.options(scope))
    }

    /// [`find_implementations`](Self::find_implementations) with explicit options
    pub fn find_implementations_with(
        &self,
        capability: &CapabilityId,
        options: &ResolveOptions,
    ) -> Result<Vec<Arc<TypeDescriptor>>> {
        let scope = options.search_scope(self.types.default_scope())?;
        Ok(self
            .index
            .find_all_implementing(capability, &scope)?
            .into_iter()
            .filter(|d| options.permits(d))
            .collect())
    }

    /// Concrete implementers of `C`
    pub fn find_implementations_of<C: Capability + ?Sized>(
        &self,
        scope: Option<&str>,
    ) -> Result<Vec<Arc<TypeDescriptor>>> {
        self.find_implementations(&C::ID, scope)
    }

    /// Construct a type by name, with constructor arguments when given
    ///
    /// # Errors
    ///
    /// `TypeNotFound` when resolution fails, `InstantiationFailed` when no
    /// accessible constructor accepts the arguments or the constructor fails.
    pub fn create_instance(
        &self,
        name: &str,
        scope: Option<&str>,
        args: Option<ConstructorArgs>,
    ) -> Result<Instance> {
        self.factory
            .instantiate_with(name, &self.options(scope), args.unwrap_or_default())
    }

    /// Construct a type by name and narrow it to `C`
    ///
    /// # Errors
    ///
    /// As [`create_instance`](Self::create_instance), plus
    /// `CapabilityMismatch` when the type does not implement `C`.
    pub fn create_instance_as<C: Capability + ?Sized>(
        &self,
        name: &str,
        scope: Option<&str>,
    ) -> Result<Box<C>> {
        self.factory.instantiate_as::<C>(name, &self.options(scope))
    }

    /// Default-construct every implementer of `capability`
    ///
    /// The first construction failure fails the whole call.
    pub fn create_all_instances(
        &self,
        capability: &CapabilityId,
        scope: Option<&str>,
    ) -> Result<Vec<Instance>> {
        self.factory
            .instantiate_all(capability, &self.options(scope))
    }

    /// Default-construct every implementer of `C`, narrowed to `C`
    pub fn create_all_as<C: Capability + ?Sized>(&self, scope: Option<&str>) -> Result<Vec<Box<C>>> {
        self.factory.instantiate_all_as::<C>(&self.options(scope))
    }

    /// Loaded and failed modules of a scope, scanning it if needed
    pub fn list_modules(&self, scope: Option<&str>) -> Result<ScanSummary> {
        let scope = SearchScope::or_default(scope, self.types.default_scope())?;
        Ok(self.modules.get_or_load(&scope)?.summary())
    }

    /// Scope searched when a call names none
    pub fn default_scope(&self) -> &SearchScope {
        self.types.default_scope()
    }

    /// Resolution counters
    pub fn stats(&self) -> StatsSnapshot {
        self.modules.scanner().stats().snapshot()
    }

    /// Shared type cache
    pub fn type_cache(&self) -> &Arc<TypeCache> {
        &self.types
    }

    /// Shared module cache
    pub fn module_cache(&self) -> &Arc<ModuleCache> {
        &self.modules
    }
}
