//! Domain layer constants
//!
//! Constants that shape discovery and scope normalization. Infrastructure
//! specific constants live in `typedex_infrastructure::constants`.

// ============================================================================
// MODULE DISCOVERY CONSTANTS
// ============================================================================

/// Prefix that platform linkers put in front of shared library file names
pub const SHARED_LIBRARY_PREFIX: &str = "lib";

/// Extensions whose file names carry the `lib` prefix
pub const PREFIXED_LIBRARY_EXTENSIONS: &[&str] = &["so", "dylib", "a", "rlib"];

/// Separator used by cargo artifact names that must map back to crate names
pub const ARTIFACT_NAME_SEPARATOR: char = '-';

/// Separator used by logical module names
pub const MODULE_NAME_SEPARATOR: char = '_';

// ============================================================================
// SCOPE CONSTANTS
// ============================================================================

/// Separator used inside normalized scope keys, independent of platform
pub const SCOPE_KEY_SEPARATOR: char = '/';
