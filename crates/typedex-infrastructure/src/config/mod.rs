//! Configuration
//!
//! Figment-backed loading of [`AppConfig`]: defaults, then a TOML file, then
//! `TYPEDEX__` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
