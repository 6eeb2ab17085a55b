//! # Application Layer
//!
//! Runtime type resolution on top of a link-time registry.
//!
//! ```text
//! TypeResolutionService
//!   └─ InstanceFactory ──► TypeCache / TypeIndex ──► ModuleCache ──► ModuleScanner
//!                                                        │               │
//!                                                   (memoized)     ModuleCatalog
//!                                                                  (linkme slices)
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | `MODULES`/`TYPES` distributed slices, `RegistryCatalog`, registration macros |
//! | [`services`] | Scanner, caches, index and factory |
//! | [`use_cases`] | `TypeResolutionService`, the API used by hosting code |

pub mod registry;
pub mod services;
pub mod use_cases;

pub use registry::RegistryCatalog;
pub use services::{
    FactoryOptions, InstanceFactory, ModuleCache, ModuleScanner, ResolutionStats, ResolveOptions,
    ScannerOptions, StatsSnapshot, TypeCache, TypeIndex,
};
pub use use_cases::{TypeResolutionService, TypeResolutionServiceBuilder};
