//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a registered constructor
pub type ConstructError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for typedex
///
/// Discovery failures (`ModuleLoad`) are recovered locally by the scanner and
/// reported through scan diagnostics. Everything else reaches the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a function (empty type name, malformed scope)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Exact-match resolution exhausted every source without a result
    #[error("Type not found: {name}")]
    TypeNotFound {
        /// The qualified type name that was requested
        name: String,
    },

    /// A module could not be loaded or its types could not be enumerated
    #[error("Module '{module}' failed to load: {reason}")]
    ModuleLoad {
        /// Logical name of the module
        module: String,
        /// Why loading failed
        reason: String,
    },

    /// Type resolved but construction failed
    #[error("Failed to instantiate {type_name}: {message}")]
    InstantiationFailed {
        /// Qualified name of the type being constructed
        type_name: String,
        /// Description of the failure
        message: String,
        /// Error raised by the constructor, if any
        #[source]
        source: Option<ConstructError>,
    },

    /// Constructed instance does not expose the requested capability
    #[error("Type {type_name} does not implement capability {capability}")]
    CapabilityMismatch {
        /// Qualified name of the constructed type
        type_name: String,
        /// Name of the requested capability
        capability: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a type not found error
    pub fn type_not_found<S: Into<String>>(name: S) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Create a module load error
    pub fn module_load<M: Into<String>, R: Into<String>>(module: M, reason: R) -> Self {
        Self::ModuleLoad {
            module: module.into(),
            reason: reason.into(),
        }
    }

    /// Create a capability mismatch error
    pub fn capability_mismatch<T: Into<String>, C: Into<String>>(
        type_name: T,
        capability: C,
    ) -> Self {
        Self::CapabilityMismatch {
            type_name: type_name.into(),
            capability: capability.into(),
        }
    }
}

// Instantiation error creation methods
impl Error {
    /// Create an instantiation error without an underlying constructor error
    pub fn instantiation<T: Into<String>, S: Into<String>>(type_name: T, message: S) -> Self {
        Self::InstantiationFailed {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an instantiation error wrapping the constructor's own error
    pub fn instantiation_with_source<T: Into<String>>(type_name: T, source: ConstructError) -> Self {
        Self::InstantiationFailed {
            type_name: type_name.into(),
            message: format!("constructor failed: {source}"),
            source: Some(source),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// True for `TypeNotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TypeNotFound { .. })
    }
}
