//! End-to-end resolution against the process scope
//!
//! These tests use the default scope, the directory of the test binary, so
//! the fixture modules are found as resident modules of the process.

use std::sync::Arc;

use typedex_application::registry::Capability;
use typedex_application::{RegistryCatalog, TypeResolutionService};

use crate::fixtures::{Animal, Cat};

fn process_service() -> TypeResolutionService {
    TypeResolutionService::builder(Arc::new(RegistryCatalog::linked()))
        .build()
        .unwrap()
}

#[test]
fn test_default_scope_is_process_directory() {
    let service = process_service();
    let exe = std::env::current_exe().unwrap();

    assert_eq!(service.default_scope().root(), exe.parent().unwrap());
}

#[test]
fn test_cat_and_dog_are_found_and_constructed() {
    let service = process_service();

    let found = service.find_implementations(&<dyn Animal>::ID, None).unwrap();
    assert_eq!(found.len(), 2);

    let animals = service.create_all_instances(&<dyn Animal>::ID, None).unwrap();
    assert_eq!(animals.len(), 2);

    let mut names: Vec<String> = animals
        .into_iter()
        .map(|i| i.into_capability::<dyn Animal>().unwrap().name().to_string())
        .collect();
    names.sort();
    assert!(names.iter().all(|n| !n.is_empty()));
    assert_eq!(names, vec!["Crookshanks", "Fido"]);
}

#[test]
fn test_cat_by_name_is_crookshanks() {
    let service = process_service();

    let cat = service
        .create_instance("zoo::Cat", None, None)
        .unwrap()
        .downcast::<Cat>()
        .unwrap();

    assert_eq!(cat.name, "Crookshanks");
}

#[test]
fn test_typed_batch_construction() {
    let service = process_service();

    let animals = service.create_all_as::<dyn Animal>(None).unwrap();

    assert_eq!(animals.len(), 2);
    assert!(animals.iter().any(|a| a.name() == "Fido"));
}

#[test]
fn test_process_scan_reports_resident_modules() {
    let service = process_service();

    let summary = service.list_modules(None).unwrap();

    assert!(summary.loaded >= 2);
    assert!(summary.failures.iter().all(|f| f.module != "zoo"));
}
