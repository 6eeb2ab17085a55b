//! Resolver configuration types

use serde::{Deserialize, Serialize};
use typedex_application::FactoryOptions;

/// Type resolution and construction configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Let non-public types resolve and be discovered
    pub include_non_public: bool,

    /// Let non-public constructors run
    pub allow_non_public_constructors: bool,
}

impl ResolverConfig {
    /// Factory options for the application layer
    pub fn to_factory_options(self) -> FactoryOptions {
        FactoryOptions {
            allow_non_public_constructors: self.allow_non_public_constructors,
        }
    }
}
