//! Instance factory
//!
//! Per call: resolve the type, pick a constructor, construct. Any failure
//! ends the call; nothing is retried and no instance is kept.

use std::sync::Arc;

use tracing::debug;
use typedex_domain::error::{Error, Result};
use typedex_domain::{
    Capability, CapabilityId, Constructor, ConstructorArgs, Instance, TypeDescriptor, Visibility,
};

use super::type_cache::{ResolveOptions, TypeCache};
use super::type_index::TypeIndex;

/// Factory settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactoryOptions {
    /// Allow non-public constructors to run
    pub allow_non_public_constructors: bool,
}

/// Builds instances of resolved types
pub struct InstanceFactory {
    types: Arc<TypeCache>,
    index: Arc<TypeIndex>,
    options: FactoryOptions,
}

impl InstanceFactory {
    /// Factory resolving through `types` and `index`
    pub fn new(types: Arc<TypeCache>, index: Arc<TypeIndex>, options: FactoryOptions) -> Self {
        Self {
            types,
            index,
            options,
        }
    }

    /// Construct `qualified_name` with its zero-argument constructor
    pub fn instantiate(&self, qualified_name: &str, options: &ResolveOptions) -> Result<Instance> {
        self.instantiate_with(qualified_name, options, ConstructorArgs::new())
    }

    /// Construct `qualified_name` with the constructor matching `args`
    pub fn instantiate_with(
        &self,
        qualified_name: &str,
        options: &ResolveOptions,
        mut args: ConstructorArgs,
    ) -> Result<Instance> {
        let descriptor = self.types.resolve(qualified_name, options)?;
        self.construct(&descriptor, &mut args)
    }

    /// Construct `qualified_name` and narrow it to capability `C`
    pub fn instantiate_as<C: Capability + ?Sized>(
        &self,
        qualified_name: &str,
        options: &ResolveOptions,
    ) -> Result<Box<C>> {
        self.instantiate(qualified_name, options)?
            .into_capability::<C>()
    }

    /// Default-construct every implementer of `capability`
    ///
    /// Fails on the first implementer that cannot be constructed.
    pub fn instantiate_all(
        &self,
        capability: &CapabilityId,
        options: &ResolveOptions,
    ) -> Result<Vec<Instance>> {
        let scope = options.search_scope(self.types.default_scope())?;

        self.index
            .find_all_implementing(capability, &scope)?
            .into_iter()
            .filter(|d| options.permits(d))
            .map(|d| self.construct(&d, &mut ConstructorArgs::new()))
            .collect()
    }

    /// Default-construct every implementer of `C`, narrowed to `C`
    pub fn instantiate_all_as<C: Capability + ?Sized>(
        &self,
        options: &ResolveOptions,
    ) -> Result<Vec<Box<C>>> {
        self.instantiate_all(&C::ID, options)?
            .into_iter()
            .map(Instance::into_capability::<C>)
            .collect()
    }

    fn construct(
        &self,
        descriptor: &Arc<TypeDescriptor>,
        args: &mut ConstructorArgs,
    ) -> Result<Instance> {
        let constructor = self.select_constructor(descriptor, args)?;
        let value = constructor
            .invoke(args)
            .map_err(|e| Error::instantiation_with_source(descriptor.name(), e))?;

        debug!(type_name = descriptor.name(), signature = %constructor.signature(), "Instance constructed");
        Ok(Instance::new(Arc::clone(descriptor), value))
    }

    fn select_constructor(
        &self,
        descriptor: &TypeDescriptor,
        args: &ConstructorArgs,
    ) -> Result<&'static Constructor> {
        let mut matching = descriptor
            .constructors()
            .iter()
            .filter(|c| c.accepts(args))
            .peekable();

        if matching.peek().is_none() {
            return Err(Error::instantiation(
                descriptor.name(),
                format!(
                    "no constructor accepts ({})",
                    args.type_names().join(", ")
                ),
            ));
        }

        matching
            .find(|c| {
                c.visibility() == Visibility::Public || self.options.allow_non_public_constructors
            })
            .ok_or_else(|| {
                Error::instantiation(descriptor.name(), "the matching constructor is not accessible")
            })
    }
}
