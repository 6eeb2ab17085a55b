//! Type Registry System
//!
//! Compile-time registration of modules and types using `linkme`
//! distributed slices, standing in for a runtime reflection catalog.
//!
//! ## Registration Flow
//!
//! ```text
//! 1. Module declares:  #[linkme::distributed_slice(MODULES)]
//!                      static ZOO: ModuleRegistration = ...
//! 2. Types declare:    #[linkme::distributed_slice(TYPES)]
//!                      static CAT: TypeRegistration = ...
//! 3. Catalog serves:   RegistryCatalog::linked()
//! 4. Scanner loads:    "plugins/libzoo.so" → "zoo" → MODULES lookup
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use typedex_application::registry::{
//!     Constructor, ModuleRegistration, TypeKind, TypeRegistration, Visibility, MODULES, TYPES,
//! };
//!
//! pub trait Animal {
//!     fn name(&self) -> &str;
//! }
//! typedex_application::capability!(dyn Animal, "zoo::Animal");
//!
//! #[linkme::distributed_slice(MODULES)]
//! static ZOO: ModuleRegistration = ModuleRegistration {
//!     name: "zoo",
//!     description: "Zoo animals",
//!     dependencies: &[],
//! };
//!
//! #[linkme::distributed_slice(TYPES)]
//! static CAT: TypeRegistration = TypeRegistration {
//!     name: "zoo::Cat",
//!     module: "zoo",
//!     kind: TypeKind::Concrete,
//!     visibility: Visibility::Public,
//!     capabilities: &[typedex_application::implements!(Cat => dyn Animal)],
//!     constructors: &[Constructor::default_of::<Cat>()],
//! };
//! ```

pub mod catalog;
mod macros;

pub use catalog::{RegistryCatalog, RegisteredModule, list_modules, list_types};

// Registration vocabulary, re-exported so registering crates and the
// exported macros only need this crate.
pub use typedex_domain::{
    Capability, CapabilityBinding, CapabilityId, Constructor, ConstructorArgs, ModuleRegistration,
    Param, TypeKind, TypeRegistration, Visibility,
};

// Auto-collection via linkme distributed slices - modules and types submit entries at link time
#[linkme::distributed_slice]
pub static MODULES: [ModuleRegistration] = [..];

#[linkme::distributed_slice]
pub static TYPES: [TypeRegistration] = [..];
