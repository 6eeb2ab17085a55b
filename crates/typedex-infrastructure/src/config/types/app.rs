//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ResolverConfig, ScannerConfig};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Module discovery
    #[serde(default)]
    pub scanner: ScannerConfig,
    /// Type resolution and construction
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
