//! Tests for instance construction

use std::any::Any;
use std::error::Error as _;

use typedex_application::registry::{
    Capability, Constructor, ConstructorArgs, ModuleRegistration, TypeKind, TypeRegistration,
    Visibility,
};
use typedex_application::services::FactoryOptions;
use typedex_application::{RegistryCatalog, TypeResolutionService};
use typedex_domain::error::ConstructError;
use typedex_domain::{Error, SearchScope};

use crate::fixtures::{Animal, Bird, Cat, Dog, module_dir, service_in, zoo_service};

#[derive(Default)]
struct Beagle;

impl Animal for Beagle {
    fn name(&self) -> &str {
        "Snoopy"
    }
}

struct Wolf;

impl Animal for Wolf {
    fn name(&self) -> &str {
        "Akela"
    }
}

fn wolf_escapes(_args: &mut ConstructorArgs) -> Result<Box<dyn Any + Send>, ConstructError> {
    Err("the wolf ran off".into())
}

static KENNEL_MODULES: [ModuleRegistration; 1] = [ModuleRegistration {
    name: "kennel",
    description: "Dogs and one wolf",
    dependencies: &[],
}];

static KENNEL_TYPES: [TypeRegistration; 2] = [
    TypeRegistration {
        name: "kennel::Beagle",
        module: "kennel",
        kind: TypeKind::Concrete,
        visibility: Visibility::Public,
        capabilities: &[typedex_application::implements!(Beagle => dyn Animal)],
        constructors: &[Constructor::default_of::<Beagle>()],
    },
    TypeRegistration {
        name: "kennel::Wolf",
        module: "kennel",
        kind: TypeKind::Concrete,
        visibility: Visibility::Public,
        capabilities: &[typedex_application::implements!(Wolf => dyn Animal)],
        constructors: &[Constructor::new(&[], wolf_escapes)],
    },
];

#[test]
fn test_default_constructor_builds_instance() {
    let (service, _dir) = zoo_service();

    let instance = service.create_instance("zoo::Cat", None, None).unwrap();

    assert_eq!(instance.type_name(), "zoo::Cat");
    assert!(instance.implements::<dyn Animal>());
    assert_eq!(instance.downcast_ref::<Cat>().unwrap().name, "Crookshanks");
}

#[test]
fn test_arguments_select_matching_constructor() {
    let (service, _dir) = zoo_service();
    let args = ConstructorArgs::new().with("Mrs Norris".to_string());

    let cat = service
        .create_instance("zoo::Cat", None, Some(args))
        .unwrap()
        .downcast::<Cat>()
        .unwrap();

    assert_eq!(cat.name, "Mrs Norris");
}

#[test]
fn test_unmatched_arguments_fail_instantiation() {
    let (service, _dir) = zoo_service();
    let args = ConstructorArgs::new().with(42_u32);

    let err = service
        .create_instance("zoo::Cat", None, Some(args))
        .unwrap_err();

    assert!(matches!(err, Error::InstantiationFailed { ref type_name, .. } if type_name == "zoo::Cat"));
    assert!(err.to_string().contains("u32"));
}

#[test]
fn test_constructor_error_is_wrapped() {
    let (service, _dir) = zoo_service();

    let err = service.create_instance("zoo::Grumpy", None, None).unwrap_err();

    assert!(matches!(err, Error::InstantiationFailed { .. }));
    let source = err.source().expect("constructor error is kept as source");
    assert!(source.to_string().contains("grumpy refuses"));
}

#[test]
fn test_constructor_rejecting_its_arguments_fails() {
    let (service, _dir) = zoo_service();
    let args = ConstructorArgs::new().with(String::new());

    let err = service
        .create_instance("zoo::Cat", None, Some(args))
        .unwrap_err();

    assert!(matches!(err, Error::InstantiationFailed { .. }));
}

#[test]
fn test_non_public_constructor_is_inaccessible_by_default() {
    let (service, _dir) = zoo_service();

    let err = service.create_instance("zoo::Hermit", None, None).unwrap_err();

    assert!(matches!(err, Error::InstantiationFailed { .. }));
    assert!(err.to_string().contains("not accessible"));
}

#[test]
fn test_non_public_constructor_runs_when_allowed() {
    let dir = module_dir(&["zoo"]);
    let service = TypeResolutionService::builder(std::sync::Arc::new(RegistryCatalog::linked()))
        .with_default_scope(SearchScope::from_path(dir.path()).unwrap())
        .with_factory_options(FactoryOptions {
            allow_non_public_constructors: true,
        })
        .build()
        .unwrap();

    let hermit = service.create_instance("zoo::Hermit", None, None).unwrap();

    assert_eq!(hermit.type_name(), "zoo::Hermit");
}

#[test]
fn test_unknown_type_is_not_found() {
    let (service, _dir) = zoo_service();

    let err = service.create_instance("zoo::Unicorn", None, None).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_narrowing_to_capability() {
    let (service, _dir) = zoo_service();

    let dog = service.create_instance_as::<dyn Animal>("zoo::Dog", None).unwrap();

    assert_eq!(dog.name(), "Fido");
}

#[test]
fn test_narrowing_to_missing_capability_is_mismatch() {
    let (service, _dir) = zoo_service();

    let err = service.create_instance_as::<dyn Bird>("zoo::Dog", None).err().unwrap();

    assert!(matches!(
        err,
        Error::CapabilityMismatch { ref type_name, ref capability }
            if type_name == "zoo::Dog" && capability == <dyn Bird>::ID.name()
    ));
}

#[test]
fn test_instance_can_be_recovered_as_concrete_type() {
    let (service, _dir) = zoo_service();

    let instance = service.create_instance("zoo::Dog", None, None).unwrap();
    let instance = instance.downcast::<Cat>().unwrap_err();
    let dog = instance.downcast::<Dog>().unwrap();

    assert_eq!(dog.name, "Fido");
}

#[test]
fn test_instances_are_not_cached() {
    let (service, _dir) = zoo_service();

    let mut first = service
        .create_instance("zoo::Cat", None, None)
        .unwrap()
        .downcast::<Cat>()
        .unwrap();
    first.name = "renamed".to_string();
    let second = service
        .create_instance("zoo::Cat", None, None)
        .unwrap()
        .downcast::<Cat>()
        .unwrap();

    assert_eq!(second.name, "Crookshanks");
}

#[test]
fn test_create_all_fails_on_first_constructor_error() {
    let dir = module_dir(&["kennel"]);
    let service = service_in(RegistryCatalog::new(&KENNEL_MODULES, &KENNEL_TYPES), &dir);

    let found = service.find_implementations_of::<dyn Animal>(None).unwrap();
    assert_eq!(found.len(), 2);

    let err = service
        .create_all_instances(&<dyn Animal>::ID, None)
        .unwrap_err();
    assert!(matches!(err, Error::InstantiationFailed { ref type_name, .. } if type_name == "kennel::Wolf"));
}

#[test]
fn test_failed_construction_leaves_resolution_cached() {
    let (service, _dir) = zoo_service();

    service.create_instance("zoo::Grumpy", None, None).unwrap_err();

    assert!(service.type_cache().get("zoo::Grumpy").is_some());
}
