//! Registry-backed module catalog
//!
//! Serves modules and types from static registration tables, either the
//! process-wide `MODULES`/`TYPES` distributed slices or tables supplied by
//! the caller.

use std::sync::Arc;

use typedex_domain::error::{Error, Result};
use typedex_domain::ports::{LoadedModule, ModuleCatalog};
use typedex_domain::{ModuleRegistration, TypeRegistration};

use super::{MODULES, TYPES};

/// Catalog over static module and type tables
#[derive(Debug, Clone, Copy)]
pub struct RegistryCatalog {
    modules: &'static [ModuleRegistration],
    types: &'static [TypeRegistration],
}

impl RegistryCatalog {
    /// Catalog over explicit tables
    pub fn new(modules: &'static [ModuleRegistration], types: &'static [TypeRegistration]) -> Self {
        Self { modules, types }
    }

    /// Catalog over everything registered through the distributed slices
    pub fn linked() -> Self {
        Self::new(&MODULES[..], &TYPES[..])
    }

    fn module(&self, name: &str) -> Option<&'static ModuleRegistration> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// First dependency of `module` that is not registered in this catalog
    fn missing_dependency(&self, module: &ModuleRegistration) -> Option<&'static str> {
        module
            .dependencies
            .iter()
            .copied()
            .find(|dep| self.module(dep).is_none())
    }
}

impl ModuleCatalog for RegistryCatalog {
    fn resident_modules(&self) -> Vec<String> {
        self.modules.iter().map(|m| m.name.to_string()).collect()
    }

    fn load(&self, logical_name: &str) -> Result<Arc<dyn LoadedModule>> {
        let registration = self.module(logical_name).ok_or_else(|| {
            Error::module_load(logical_name, "no module is registered under this name")
        })?;

        Ok(Arc::new(RegisteredModule {
            registration,
            catalog: *self,
        }))
    }

    /// Only types whose module is registered and can enumerate its types
    fn find_type(&self, qualified_name: &str) -> Option<&'static TypeRegistration> {
        let registration = self.types.iter().find(|t| t.name == qualified_name)?;
        let module = self.module(registration.module)?;
        if self.missing_dependency(module).is_some() {
            return None;
        }
        Some(registration)
    }
}

/// Module loaded from a [`RegistryCatalog`]
#[derive(Debug)]
pub struct RegisteredModule {
    registration: &'static ModuleRegistration,
    catalog: RegistryCatalog,
}

impl RegisteredModule {
    /// Registration backing this module
    pub fn registration(&self) -> &'static ModuleRegistration {
        self.registration
    }
}

impl LoadedModule for RegisteredModule {
    fn name(&self) -> &str {
        self.registration.name
    }

    fn types(&self) -> Result<Vec<&'static TypeRegistration>> {
        if let Some(missing) = self.catalog.missing_dependency(self.registration) {
            return Err(Error::module_load(
                self.registration.name,
                format!("depends on module '{missing}', which is not registered"),
            ));
        }

        Ok(self
            .catalog
            .types
            .iter()
            .filter(|t| t.module == self.registration.name)
            .collect())
    }
}

/// List all linked modules
///
/// Returns (name, description) tuples. Useful for CLI help and diagnostics.
pub fn list_modules() -> Vec<(&'static str, &'static str)> {
    MODULES.iter().map(|m| (m.name, m.description)).collect()
}

/// List all linked types as (qualified name, module) tuples
pub fn list_types() -> Vec<(&'static str, &'static str)> {
    TYPES.iter().map(|t| (t.name, t.module)).collect()
}
