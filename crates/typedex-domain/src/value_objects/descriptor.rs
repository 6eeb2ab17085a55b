//! Resolved type descriptors

use std::fmt;

use super::capability::{CapabilityBinding, CapabilityId};
use super::registration::{Constructor, TypeRegistration, Visibility};

/// A resolved, constructible type
///
/// Only built from concrete registrations: abstract types and interfaces
/// never become descriptors.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    registration: &'static TypeRegistration,
}

impl TypeDescriptor {
    /// Descriptor for `registration`, or `None` when it is not concrete
    pub fn from_registration(registration: &'static TypeRegistration) -> Option<Self> {
        registration
            .is_concrete()
            .then_some(Self { registration })
    }

    /// Fully-qualified type name
    pub fn name(&self) -> &'static str {
        self.registration.name
    }

    /// Logical name of the declaring module
    pub fn module(&self) -> &'static str {
        self.registration.module
    }

    /// Type visibility
    pub fn visibility(&self) -> Visibility {
        self.registration.visibility
    }

    /// True for public types
    pub fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }

    /// Implemented capabilities
    pub fn capabilities(&self) -> impl Iterator<Item = CapabilityId> + '_ {
        self.registration
            .capabilities
            .iter()
            .map(CapabilityBinding::capability)
    }

    /// True when `capability` is implemented
    pub fn implements(&self, capability: &CapabilityId) -> bool {
        self.registration.implements(capability)
    }

    /// Narrowing binding for `capability`
    pub fn binding(&self, capability: &CapabilityId) -> Option<&'static CapabilityBinding> {
        self.registration.binding(capability)
    }

    /// Declared constructors
    pub fn constructors(&self) -> &'static [Constructor] {
        self.registration.constructors
    }

    /// Underlying registration
    pub fn registration(&self) -> &'static TypeRegistration {
        self.registration
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.module() == other.module()
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capabilities: Vec<&str> = self.capabilities().map(|c| c.name()).collect();
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name())
            .field("module", &self.module())
            .field("visibility", &self.visibility())
            .field("capabilities", &capabilities)
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
