//! Capability identities
//!
//! A capability is a trait object type (`dyn Animal`). Its identity is the
//! `TypeId` of that trait object, so two traits with the same shape but
//! different names are different capabilities.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Cast from an erased instance to an erased `Box<C>` for one capability `C`
///
/// Returns the original value when it is not of the bound concrete type.
pub type CastFn = fn(Box<dyn Any + Send>) -> Result<Box<dyn Any>, Box<dyn Any + Send>>;

/// Identity of a capability
#[derive(Clone, Copy)]
pub struct CapabilityId {
    name: &'static str,
    type_id: fn() -> TypeId,
}

impl CapabilityId {
    /// Identity of the capability type `C`
    pub const fn of<C: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<C>,
        }
    }

    /// Display name given at declaration
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `TypeId` of the capability's trait object type
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// True when this identity belongs to `C`
    pub fn is<C: ?Sized + 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<C>()
    }
}

impl PartialEq for CapabilityId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for CapabilityId {}

impl Hash for CapabilityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id().hash(state);
    }
}

impl fmt::Debug for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CapabilityId").field(&self.name).finish()
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Marker implemented for trait object types that act as discovery keys
///
/// Usually implemented through `typedex_application::capability!`.
pub trait Capability: 'static {
    /// Identity of this capability
    const ID: CapabilityId;
}

/// One capability implemented by a registered type, with its narrowing cast
#[derive(Clone, Copy)]
pub struct CapabilityBinding {
    capability: CapabilityId,
    cast: CastFn,
}

impl CapabilityBinding {
    /// Bind a capability to the cast that narrows the concrete type to it
    pub const fn new(capability: CapabilityId, cast: CastFn) -> Self {
        Self { capability, cast }
    }

    /// The bound capability
    pub fn capability(&self) -> CapabilityId {
        self.capability
    }

    /// Narrow an erased value; see [`CastFn`]
    pub fn cast(&self, value: Box<dyn Any + Send>) -> Result<Box<dyn Any>, Box<dyn Any + Send>> {
        (self.cast)(value)
    }
}

impl fmt::Debug for CapabilityBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CapabilityBinding")
            .field(&self.capability.name)
            .finish()
    }
}
