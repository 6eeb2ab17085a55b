//! # typedex
//!
//! Runtime type resolution and instantiation for Rust processes.
//!
//! Modules and types register themselves at link time; a
//! [`TypeResolutionService`] then discovers the modules of a search scope,
//! resolves fully-qualified type names, finds every implementer of a
//! capability, and constructs instances. Discovery results are memoized per
//! scope and per name for the life of the service.
//!
//! ## Example
//!
//! ```ignore
//! use typedex::registry::{Constructor, ModuleRegistration, TypeKind, TypeRegistration, Visibility, MODULES, TYPES};
//!
//! pub trait Animal: Send {
//!     fn name(&self) -> &str;
//! }
//! typedex::capability!(dyn Animal, "zoo::Animal");
//!
//! #[derive(Default)]
//! pub struct Cat;
//! impl Animal for Cat {
//!     fn name(&self) -> &str { "Crookshanks" }
//! }
//!
//! #[typedex::linkme::distributed_slice(MODULES)]
//! #[linkme(crate = typedex::linkme)]
//! static ZOO: ModuleRegistration = ModuleRegistration { name: "zoo", description: "", dependencies: &[] };
//!
//! #[typedex::linkme::distributed_slice(TYPES)]
//! #[linkme(crate = typedex::linkme)]
//! static CAT: TypeRegistration = TypeRegistration {
//!     name: "zoo::Cat",
//!     module: "zoo",
//!     kind: TypeKind::Concrete,
//!     visibility: Visibility::Public,
//!     capabilities: &[typedex::implements!(Cat => dyn Animal)],
//!     constructors: &[Constructor::default_of::<Cat>()],
//! };
//!
//! let service = typedex::bootstrap(&typedex::AppConfig::default())?;
//! let cat = service.create_instance_as::<dyn Animal>("zoo::Cat", None)?;
//! assert_eq!(cat.name(), "Crookshanks");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, catalog ports and the error taxonomy
//! - `application` - link-time registry, scanner, caches, index and factory
//! - `infrastructure` - configuration, logging and the bootstrap composition root

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use typedex_domain::*;
}

/// Application layer - registry and resolution services
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use typedex_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use typedex_infrastructure::*;
}

pub use linkme;
pub use typedex_application::registry;
pub use typedex_application::{capability, implements};

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the service API at the crate root
pub use typedex_application::{
    FactoryOptions, ResolveOptions, ScannerOptions, StatsSnapshot, TypeResolutionService,
    TypeResolutionServiceBuilder,
};
pub use typedex_infrastructure::{AppConfig, ConfigLoader, bootstrap, init_logging};
