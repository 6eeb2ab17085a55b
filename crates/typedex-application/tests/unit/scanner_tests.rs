//! Tests for module discovery

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use typedex_application::services::{ModuleScanner, ScannerOptions};
use typedex_application::RegistryCatalog;
use typedex_domain::{Error, LoadStatus, SearchScope};

fn scanner(options: ScannerOptions) -> ModuleScanner {
    ModuleScanner::new(Arc::new(RegistryCatalog::linked()), options)
}

fn so_only() -> ScannerOptions {
    ScannerOptions::default().with_extensions(["so"])
}

/// a/libzoo.so, aviary.so, b/zoo.so, ghost.so, notes.txt
fn mixed_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    for file in ["a/libzoo.so", "aviary.so", "b/zoo.so", "ghost.so", "notes.txt"] {
        fs::write(dir.path().join(file), b"").unwrap();
    }
    dir
}

fn names<'a>(handles: impl Iterator<Item = &'a typedex_domain::ModuleHandle>) -> Vec<&'a str> {
    handles.map(|h| h.name()).collect()
}

#[test]
fn test_scan_loads_by_logical_name_in_walk_order() {
    let dir = mixed_dir();
    let scope = SearchScope::from_path(dir.path()).unwrap();

    let set = scanner(so_only()).load_all(&scope).unwrap();

    assert_eq!(names(set.loaded()), vec!["zoo", "aviary"]);
    assert_eq!(set.scope(), scope.key());
}

#[test]
fn test_unknown_module_is_recorded_not_fatal() {
    let dir = mixed_dir();
    let scope = SearchScope::from_path(dir.path()).unwrap();

    let set = scanner(so_only()).load_all(&scope).unwrap();

    let failed: Vec<_> = set.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].name(), "ghost");
    assert_eq!(failed[0].status(), LoadStatus::Failed);
    assert!(failed[0].module().is_none());
    assert!(failed[0].failure_reason().is_some());
    assert!(failed[0].origin().ends_with("ghost.so"));
}

#[test]
fn test_duplicate_logical_name_loads_once() {
    let dir = mixed_dir();
    let scope = SearchScope::from_path(dir.path()).unwrap();

    let set = scanner(so_only()).load_all(&scope).unwrap();

    let zoo: Vec<_> = set.handles().iter().filter(|h| h.name() == "zoo").collect();
    assert_eq!(zoo.len(), 1);
    assert!(zoo[0].origin().ends_with("a/libzoo.so"));
}

#[test]
fn test_max_depth_limits_walk() {
    let dir = mixed_dir();
    let scope = SearchScope::from_path(dir.path()).unwrap();

    let set = scanner(so_only().with_max_depth(1)).load_all(&scope).unwrap();

    assert_eq!(names(set.loaded()), vec!["aviary"]);
    assert_eq!(set.failed_count(), 1);
}

#[test]
fn test_other_extensions_are_ignored() {
    let dir = mixed_dir();
    let scope = SearchScope::from_path(dir.path()).unwrap();

    let set = scanner(ScannerOptions::default().with_extensions(["txt"]))
        .load_all(&scope)
        .unwrap();

    assert_eq!(set.loaded_count(), 0);
    assert_eq!(names(set.failed()), vec!["notes"]);
}

#[test]
fn test_empty_scope_yields_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let scope = SearchScope::from_path(dir.path()).unwrap();

    let set = scanner(so_only()).load_all(&scope).unwrap();

    assert!(set.handles().is_empty());
    let summary = set.summary();
    assert_eq!(summary.loaded, 0);
    assert!(summary.failures.is_empty());
}

#[test]
fn test_missing_scope_is_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let scope = SearchScope::from_path(dir.path().join("missing")).unwrap();
    let scanner = scanner(so_only());

    let err = scanner.load_all(&scope).unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(scanner.stats().snapshot().module_scans, 0);
}

#[test]
fn test_every_scan_is_counted() {
    let dir = mixed_dir();
    let scope = SearchScope::from_path(dir.path()).unwrap();
    let scanner = scanner(so_only());

    scanner.load_all(&scope).unwrap();
    scanner.load_all(&scope).unwrap();

    assert_eq!(scanner.stats().snapshot().module_scans, 2);
}

#[test]
fn test_process_scope_includes_resident_modules_first() {
    let scope = SearchScope::process().unwrap();
    let exe = std::env::current_exe().unwrap();

    let set = scanner(ScannerOptions::default()).load_all(&scope).unwrap();

    let resident: Vec<_> = set.handles().iter().take(2).collect();
    assert!(resident.iter().all(|h| h.is_loaded() && h.origin() == exe));
    let mut resident_names: Vec<_> = resident.iter().map(|h| h.name()).collect();
    resident_names.sort_unstable();
    assert_eq!(resident_names, vec!["aviary", "zoo"]);
}
