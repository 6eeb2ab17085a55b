//! Configuration types module

pub mod app;
pub mod logging;
pub mod resolver;
pub mod scanner;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use scanner::ScannerConfig;
