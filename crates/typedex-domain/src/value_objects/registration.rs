//! Type and module registrations
//!
//! Registrations are the raw records a module contributes: every type it
//! declares, including abstract bases and interfaces. Filtering down to
//! concrete types happens when descriptors are built.

use std::any::{Any, TypeId};
use std::fmt;

use serde::Serialize;

use super::capability::{CapabilityBinding, CapabilityId};
use crate::error::ConstructError;

/// Kind of a registered type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeKind {
    /// Can be constructed
    Concrete,
    /// Declares capabilities but cannot be constructed
    Abstract,
    /// A capability declaration itself
    Interface,
}

/// Visibility of a type or constructor outside its module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Visibility {
    /// Visible to every caller
    Public,
    /// Only visible to callers that opt in
    NonPublic,
}

/// Declared constructor parameter
#[derive(Clone, Copy)]
pub struct Param {
    name: &'static str,
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl Param {
    /// Parameter `name` of type `T`
    pub const fn of<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
        }
    }

    /// Parameter name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `TypeId` an argument must have to bind to this parameter
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Rust type name of the parameter
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name())
    }
}

struct Argument {
    value: Option<Box<dyn Any + Send>>,
    type_id: TypeId,
    type_name: &'static str,
}

/// Positional constructor arguments
#[derive(Default)]
pub struct ConstructorArgs {
    values: Vec<Argument>,
}

impl ConstructorArgs {
    /// Empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument (builder form)
    #[must_use]
    pub fn with<T: Any + Send>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append an argument
    pub fn push<T: Any + Send>(&mut self, value: T) {
        self.values.push(Argument {
            value: Some(Box::new(value)),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        });
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Type names of the arguments, in order
    pub fn type_names(&self) -> Vec<&'static str> {
        self.values.iter().map(|a| a.type_name).collect()
    }

    /// Take argument `index` as `T`
    ///
    /// Leaves the argument in place when its type does not match.
    pub fn take<T: Any>(&mut self, index: usize) -> Result<T, ConstructError> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| format!("missing constructor argument #{index}"))?;
        let value = slot
            .value
            .take()
            .ok_or_else(|| format!("constructor argument #{index} was already taken"))?;

        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(original) => {
                slot.value = Some(original);
                Err(format!(
                    "constructor argument #{index} is {}, expected {}",
                    slot.type_name,
                    std::any::type_name::<T>()
                )
                .into())
            }
        }
    }

    fn matches(&self, params: &[Param]) -> bool {
        params.len() == self.values.len()
            && params
                .iter()
                .zip(&self.values)
                .all(|(param, arg)| param.type_id() == arg.type_id)
    }
}

impl fmt::Debug for ConstructorArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.type_names()).finish()
    }
}

/// Constructor entry point of a registered type
pub type InvokeFn = fn(&mut ConstructorArgs) -> Result<Box<dyn Any + Send>, ConstructError>;

/// Declared constructor
#[derive(Clone, Copy)]
pub struct Constructor {
    params: &'static [Param],
    visibility: Visibility,
    invoke: InvokeFn,
}

fn construct_default<T: Default + Any + Send>(
    _args: &mut ConstructorArgs,
) -> Result<Box<dyn Any + Send>, ConstructError> {
    Ok(Box::new(T::default()))
}

impl Constructor {
    /// Public constructor with the given parameters
    pub const fn new(params: &'static [Param], invoke: InvokeFn) -> Self {
        Self {
            params,
            visibility: Visibility::Public,
            invoke,
        }
    }

    /// Public zero-argument constructor backed by `T::default()`
    pub const fn default_of<T: Default + Any + Send>() -> Self {
        Self::new(&[], construct_default::<T>)
    }

    /// Same constructor, hidden from callers that do not opt in
    #[must_use]
    pub const fn non_public(self) -> Self {
        Self {
            visibility: Visibility::NonPublic,
            ..self
        }
    }

    /// Declared parameters
    pub fn params(&self) -> &'static [Param] {
        self.params
    }

    /// Constructor visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// True when arity and every argument type match the parameters
    pub fn accepts(&self, args: &ConstructorArgs) -> bool {
        args.matches(self.params)
    }

    /// Run the constructor
    pub fn invoke(&self, args: &mut ConstructorArgs) -> Result<Box<dyn Any + Send>, ConstructError> {
        (self.invoke)(args)
    }

    /// Human readable signature, e.g. `(name: alloc::string::String)`
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(|p| format!("{p:?}")).collect();
        format!("({})", params.join(", "))
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("signature", &self.signature())
            .field("visibility", &self.visibility)
            .finish()
    }
}

/// A type declared by a module
#[derive(Debug)]
pub struct TypeRegistration {
    /// Fully-qualified type name, the resolution key
    pub name: &'static str,
    /// Logical name of the declaring module
    pub module: &'static str,
    /// Concrete, abstract or interface
    pub kind: TypeKind,
    /// Visibility outside the module
    pub visibility: Visibility,
    /// Capabilities implemented, with their narrowing casts
    pub capabilities: &'static [CapabilityBinding],
    /// Available constructors
    pub constructors: &'static [Constructor],
}

impl TypeRegistration {
    /// True for constructible types
    pub fn is_concrete(&self) -> bool {
        self.kind == TypeKind::Concrete
    }

    /// Binding for `capability`, if implemented
    pub fn binding(&self, capability: &CapabilityId) -> Option<&'static CapabilityBinding> {
        self.capabilities
            .iter()
            .find(|b| b.capability() == *capability)
    }

    /// True when `capability` is among the implemented capabilities
    pub fn implements(&self, capability: &CapabilityId) -> bool {
        self.binding(capability).is_some()
    }
}

/// A module available to the catalog
#[derive(Debug)]
pub struct ModuleRegistration {
    /// Logical module name, matched against discovered file names
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Modules that must be registered for this module's types to enumerate
    pub dependencies: &'static [&'static str],
}
