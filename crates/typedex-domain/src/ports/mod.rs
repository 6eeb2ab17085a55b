//! Domain Port Interfaces
//!
//! Traits the application layer depends on to reach loadable code.

pub mod catalog;

pub use catalog::{LoadedModule, ModuleCatalog};
