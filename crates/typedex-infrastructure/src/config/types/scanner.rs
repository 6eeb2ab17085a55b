//! Module scanner configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use typedex_application::ScannerOptions;

use crate::constants::DEFAULT_MODULE_EXTENSION;

/// Module scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Scope searched when a call names none; the executable's directory when unset
    pub default_scope: Option<PathBuf>,

    /// File extensions treated as modules, without the leading dot
    pub extensions: Vec<String>,

    /// Follow symbolic links while walking a scope
    pub follow_links: bool,

    /// Maximum walk depth below the scope root, unlimited when unset
    pub max_depth: Option<usize>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            default_scope: None,
            extensions: vec![DEFAULT_MODULE_EXTENSION.to_string()],
            follow_links: false,
            max_depth: None,
        }
    }
}

impl ScannerConfig {
    /// Scanner options for the application layer
    pub fn to_options(&self) -> ScannerOptions {
        let options = ScannerOptions::default()
            .with_extensions(self.extensions.iter().cloned())
            .with_follow_links(self.follow_links);
        match self.max_depth {
            Some(depth) => options.with_max_depth(depth),
            None => options,
        }
    }
}
