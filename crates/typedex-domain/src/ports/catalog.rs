//! Module catalog port
//!
//! The catalog is the in-process collection of loadable modules. Discovery
//! finds module files on disk; the catalog turns their logical names into
//! modules whose types can be enumerated.

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::TypeRegistration;

/// A module loaded from the catalog
pub trait LoadedModule: Send + Sync {
    /// Logical module name
    fn name(&self) -> &str;

    /// Every type the module declares, abstract and interface types included
    ///
    /// Fails when the module cannot enumerate its types, for example because
    /// a module it depends on is not available.
    fn types(&self) -> Result<Vec<&'static TypeRegistration>>;
}

/// Source of loadable modules and directly addressable types
pub trait ModuleCatalog: Send + Sync {
    /// Logical names of the modules linked into the running process
    fn resident_modules(&self) -> Vec<String>;

    /// Load a module by logical name
    fn load(&self, logical_name: &str) -> Result<Arc<dyn LoadedModule>>;

    /// Look a type up by exact fully-qualified name without scanning modules
    ///
    /// Types of modules whose types cannot be enumerated are not returned.
    fn find_type(&self, qualified_name: &str) -> Option<&'static TypeRegistration>;
}
