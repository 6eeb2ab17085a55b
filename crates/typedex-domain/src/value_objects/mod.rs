//! Value objects

pub mod capability;
pub mod descriptor;
pub mod instance;
pub mod module;
pub mod registration;
pub mod scope;

pub use capability::{Capability, CapabilityBinding, CapabilityId, CastFn};
pub use descriptor::TypeDescriptor;
pub use instance::Instance;
pub use module::{LoadStatus, ModuleFailure, ModuleHandle, ModuleSet, ScanSummary};
pub use registration::{
    Constructor, ConstructorArgs, InvokeFn, ModuleRegistration, Param, TypeKind,
    TypeRegistration, Visibility,
};
pub use scope::{ScopeKey, SearchScope};
