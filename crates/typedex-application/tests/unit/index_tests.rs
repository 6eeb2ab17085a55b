//! Tests for capability discovery

use typedex_application::registry::Capability;
use typedex_application::services::ResolveOptions;
use typedex_application::RegistryCatalog;
use typedex_domain::TypeKind;

use crate::fixtures::{Animal, Bird, Creature, Pet, module_dir, service_in, zoo_service};

fn sorted_names(service_result: &[std::sync::Arc<typedex_domain::TypeDescriptor>]) -> Vec<&'static str> {
    let mut names: Vec<_> = service_result.iter().map(|d| d.name()).collect();
    names.sort_unstable();
    names
}

#[test]
fn test_only_concrete_implementers_are_returned() {
    let (service, _dir) = zoo_service();

    let animals = service.find_implementations(&<dyn Animal>::ID, None).unwrap();

    assert_eq!(sorted_names(&animals), vec!["zoo::Cat", "zoo::Dog"]);
    assert!(animals.iter().all(|d| d.registration().kind == TypeKind::Concrete));
    assert!(animals.iter().all(|d| d.name() != <dyn Animal>::ID.name()));
}

#[test]
fn test_structurally_identical_capability_does_not_match() {
    let (service, _dir) = zoo_service();

    let creatures = service.find_implementations_of::<dyn Creature>(None).unwrap();

    assert_eq!(sorted_names(&creatures), vec!["zoo::CatExtended"]);
}

#[test]
fn test_type_with_several_capabilities_matches_each() {
    let (service, _dir) = zoo_service();

    let pets = service.find_implementations_of::<dyn Pet>(None).unwrap();

    assert_eq!(sorted_names(&pets), vec!["zoo::Cat"]);
    assert!(pets[0].implements(&<dyn Animal>::ID));
}

#[test]
fn test_non_public_implementers_need_opt_in() {
    let (service, _dir) = zoo_service();
    let options = ResolveOptions::new().with_non_public(true);

    let animals = service
        .find_implementations_with(&<dyn Animal>::ID, &options)
        .unwrap();

    assert_eq!(sorted_names(&animals), vec!["zoo::Cat", "zoo::Dog", "zoo::Mouse"]);
}

#[test]
fn test_module_that_cannot_enumerate_is_skipped() {
    let dir = module_dir(&["aviary", "zoo"]);
    let service = service_in(RegistryCatalog::linked(), &dir);

    let birds = service.find_implementations_of::<dyn Bird>(None).unwrap();
    let animals = service.find_implementations_of::<dyn Animal>(None).unwrap();

    assert!(birds.is_empty());
    assert_eq!(animals.len(), 2);
}

#[test]
fn test_scope_without_modules_finds_nothing() {
    let (service, _dir) = zoo_service();
    let empty = module_dir(&[]);

    let animals = service
        .find_implementations(&<dyn Animal>::ID, empty.path().to_str())
        .unwrap();

    assert!(animals.is_empty());
}

#[test]
fn test_repeated_queries_reuse_the_module_scan() {
    let (service, _dir) = zoo_service();

    service.find_implementations_of::<dyn Animal>(None).unwrap();
    service.find_implementations_of::<dyn Pet>(None).unwrap();

    assert_eq!(service.stats().module_scans, 1);
}

#[test]
fn test_list_modules_reports_failures() {
    let dir = module_dir(&["zoo", "ghost"]);
    let service = service_in(RegistryCatalog::linked(), &dir);

    let summary = service.list_modules(None).unwrap();

    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].module, "ghost");
    assert_eq!(&summary.scope, service.default_scope().key());
}
