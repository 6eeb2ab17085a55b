//! Service bootstrap
//!
//! Composition root: turns an [`AppConfig`] into a ready
//! [`TypeResolutionService`] over the linked registry.
//!
//! ```text
//! AppConfig → ScannerOptions / FactoryOptions → TypeResolutionService
//!                                                    ↑
//!                                        RegistryCatalog::linked()
//! ```

use std::sync::Arc;

use tracing::info;
use typedex_application::{RegistryCatalog, TypeResolutionService};
use typedex_domain::error::Result;
use typedex_domain::ports::ModuleCatalog;
use typedex_domain::SearchScope;

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;

/// Build a resolution service over the linked registry
pub fn bootstrap(config: &AppConfig) -> Result<TypeResolutionService> {
    bootstrap_with_catalog(config, Arc::new(RegistryCatalog::linked()))
}

/// Build a resolution service over `catalog`
pub fn bootstrap_with_catalog(
    config: &AppConfig,
    catalog: Arc<dyn ModuleCatalog>,
) -> Result<TypeResolutionService> {
    validate_app_config(config)?;

    let mut builder = TypeResolutionService::builder(catalog)
        .with_scanner_options(config.scanner.to_options())
        .with_factory_options(config.resolver.to_factory_options())
        .with_include_non_public(config.resolver.include_non_public);
    if let Some(scope) = &config.scanner.default_scope {
        builder = builder.with_default_scope(SearchScope::from_path(scope)?);
    }

    let service = builder.build()?;
    info!(
        default_scope = %service.default_scope().key(),
        extensions = ?config.scanner.extensions,
        include_non_public = config.resolver.include_non_public,
        "Type resolution service ready"
    );
    Ok(service)
}
