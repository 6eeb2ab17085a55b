//! Use cases exposed to hosting code

pub mod resolution_service;

pub use resolution_service::{TypeResolutionService, TypeResolutionServiceBuilder};
