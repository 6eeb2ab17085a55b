//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `typedex_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "typedex.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "typedex";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore:
/// `TYPEDEX__SCANNER__MAX_DEPTH=3`.
pub const CONFIG_ENV_PREFIX: &str = "TYPEDEX";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SCANNER CONSTANTS
// ============================================================================

/// Module file extension scanned by default
pub const DEFAULT_MODULE_EXTENSION: &str = std::env::consts::DLL_EXTENSION;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "TYPEDEX_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum number of log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// File name stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "typedex";
