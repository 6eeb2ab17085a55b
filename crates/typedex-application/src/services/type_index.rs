//! Capability index
//!
//! Answers "which concrete types implement this capability" for a scope.
//! Matching compares capability identity, never shape.

use std::sync::Arc;

use tracing::{debug, warn};
use typedex_domain::error::Result;
use typedex_domain::{CapabilityId, SearchScope, TypeDescriptor};

use super::module_cache::ModuleCache;

/// Capability to implementations view over cached modules
pub struct TypeIndex {
    modules: Arc<ModuleCache>,
}

impl TypeIndex {
    /// Index reading modules from `modules`
    pub fn new(modules: Arc<ModuleCache>) -> Self {
        Self { modules }
    }

    /// Concrete types implementing `capability`, in module discovery order
    ///
    /// A module whose types cannot be enumerated is skipped for this query.
    pub fn find_all_implementing(
        &self,
        capability: &CapabilityId,
        scope: &SearchScope,
    ) -> Result<Vec<Arc<TypeDescriptor>>> {
        let set = self.modules.get_or_load(scope)?;
        let mut found = Vec::new();

        for module in set.loaded().filter_map(|h| h.module()) {
            let types = match module.types() {
                Ok(types) => types,
                Err(e) => {
                    warn!(module = module.name(), error = %e, "Skipping module whose types cannot be enumerated");
                    continue;
                }
            };

            found.extend(
                types
                    .into_iter()
                    .filter(|t| t.implements(capability))
                    .filter_map(TypeDescriptor::from_registration)
                    .map(Arc::new),
            );
        }

        debug!(
            capability = %capability,
            scope = %scope.key(),
            count = found.len(),
            "Capability implementations found"
        );
        Ok(found)
    }
}
