//! Configuration Loader Tests

use std::path::PathBuf;

use tempfile::TempDir;
use typedex_domain::Error;
use typedex_infrastructure::config::loader::{ConfigBuilder, ConfigLoader, validate_app_config};
use typedex_infrastructure::config::{AppConfig, ResolverConfig, ScannerConfig};
use typedex_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MODULE_EXTENSION};

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typedex.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.scanner.extensions, vec![DEFAULT_MODULE_EXTENSION]);
    assert!(config.scanner.default_scope.is_none());
    assert!(!config.scanner.follow_links);
    assert!(config.scanner.max_depth.is_none());
    assert!(!config.resolver.include_non_public);
    assert!(!config.resolver.allow_non_public_constructors);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let (_dir, path) = write_config(
        r#"
[scanner]
extensions = ["so", "dylib"]
max_depth = 2

[resolver]
include_non_public = true
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.scanner.extensions, vec!["so", "dylib"]);
    assert_eq!(config.scanner.max_depth, Some(2));
    assert!(config.resolver.include_non_public);
    assert!(!config.resolver.allow_non_public_constructors);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load().unwrap();

    assert_eq!(config.scanner.extensions, vec![DEFAULT_MODULE_EXTENSION]);
    assert!(loader.config_path().is_some());
}

#[test]
fn test_config_save_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let original = ConfigBuilder::new()
        .with_scanner(ScannerConfig {
            default_scope: Some(dir.path().to_path_buf()),
            extensions: vec!["plugin".to_string()],
            follow_links: true,
            max_depth: Some(4),
        })
        .with_resolver(ResolverConfig {
            include_non_public: false,
            allow_non_public_constructors: true,
        })
        .build();

    ConfigLoader::new().save_to_file(&original, &path).unwrap();
    let loaded = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_invalid_toml_is_configuration_error() {
    let (_dir, path) = write_config("[scanner\nextensions = 3");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_wrong_value_type_is_configuration_error() {
    let (_dir, path) = write_config("[scanner]\nmax_depth = \"deep\"\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_validation_rejects_bad_scanner_settings() {
    let cases = [
        "[scanner]\nextensions = []\n",
        "[scanner]\nextensions = [\".so\"]\n",
        "[scanner]\nextensions = [\"a/so\"]\n",
        "[scanner]\nextensions = [\"\"]\n",
        "[scanner]\nmax_depth = 0\n",
        "[scanner]\ndefault_scope = \"\"\n",
    ];

    for contents in cases {
        let (_dir, path) = write_config(contents);
        let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
        assert!(
            matches!(err, Error::Configuration { .. }),
            "expected a configuration error for {contents:?}, got {err:?}"
        );
    }
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let (_dir, path) = write_config("[logging]\nlevel = \"chatty\"\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();

    assert!(err.to_string().contains("chatty"));
}

#[test]
fn test_scanner_config_maps_to_options() {
    let scanner = ScannerConfig {
        default_scope: None,
        extensions: vec!["so".to_string()],
        follow_links: true,
        max_depth: Some(3),
    };

    let options = scanner.to_options();

    assert_eq!(options.extensions, vec!["so"]);
    assert!(options.follow_links);
    assert_eq!(options.max_depth, Some(3));
}

#[test]
fn test_resolver_config_maps_to_factory_options() {
    let resolver = ResolverConfig {
        include_non_public: true,
        allow_non_public_constructors: true,
    };

    assert!(resolver.to_factory_options().allow_non_public_constructors);
}
