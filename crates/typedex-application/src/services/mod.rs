//! Resolution services, leaf first: scanner, module cache, type index,
//! type cache, instance factory.

pub mod factory;
pub mod module_cache;
pub mod scanner;
pub mod stats;
pub mod type_cache;
pub mod type_index;

pub use factory::{FactoryOptions, InstanceFactory};
pub use module_cache::ModuleCache;
pub use scanner::{ModuleScanner, ScannerOptions, logical_module_name};
pub use stats::{ResolutionStats, StatsSnapshot};
pub use type_cache::{ResolveOptions, TypeCache};
pub use type_index::TypeIndex;
