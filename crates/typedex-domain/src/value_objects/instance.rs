//! Constructed instances

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::capability::Capability;
use super::descriptor::TypeDescriptor;
use crate::error::{Error, Result};

/// A freshly constructed object, owned by the caller
///
/// The value is type-erased; narrow it to a capability with
/// [`Instance::into_capability`] or recover the concrete type with
/// [`Instance::downcast`].
pub struct Instance {
    descriptor: Arc<TypeDescriptor>,
    value: Box<dyn Any + Send>,
}

impl Instance {
    /// Wrap a constructed value
    pub fn new(descriptor: Arc<TypeDescriptor>, value: Box<dyn Any + Send>) -> Self {
        Self { descriptor, value }
    }

    /// Descriptor of the constructed type
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// Fully-qualified name of the constructed type
    pub fn type_name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// True when the type declares capability `C`
    pub fn implements<C: Capability + ?Sized>(&self) -> bool {
        self.descriptor.implements(&C::ID)
    }

    /// Narrow to capability `C`
    pub fn into_capability<C: Capability + ?Sized>(self) -> Result<Box<C>> {
        let type_name = self.type_name();
        let mismatch = || Error::capability_mismatch(type_name, C::ID.name());

        let binding = self.descriptor.binding(&C::ID).ok_or_else(mismatch)?;
        let narrowed = binding.cast(self.value).map_err(|_| mismatch())?;
        narrowed
            .downcast::<Box<C>>()
            .map(|boxed| *boxed)
            .map_err(|_| mismatch())
    }

    /// Recover the concrete type
    pub fn downcast<T: Any>(self) -> std::result::Result<Box<T>, Self> {
        let Self { descriptor, value } = self;
        value
            .downcast::<T>()
            .map_err(|value| Self { descriptor, value })
    }

    /// Borrow as the concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.type_name())
            .finish_non_exhaustive()
    }
}
