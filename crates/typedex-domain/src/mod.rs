//! # Domain Layer
//!
//! Core types for runtime type resolution: search scopes, capability
//! identities, type registrations and descriptors, module handles, and the
//! catalog ports that the application layer drives.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain constants |
//! | [`ports`] | `ModuleCatalog` and `LoadedModule` traits |
//! | [`value_objects`] | Scopes, capabilities, registrations, descriptors, instances |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{LoadedModule, ModuleCatalog};
pub use value_objects::*;
