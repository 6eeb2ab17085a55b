//! Registration macros

/// Declare a trait object type as a capability
///
/// ```ignore
/// pub trait Animal {
///     fn name(&self) -> &str;
/// }
/// typedex_application::capability!(dyn Animal, "zoo::Animal");
/// ```
#[macro_export]
macro_rules! capability {
    ($capability:ty, $name:expr) => {
        impl $crate::registry::Capability for $capability {
            const ID: $crate::registry::CapabilityId =
                $crate::registry::CapabilityId::of::<$capability>($name);
        }
    };
}

/// Bind a concrete type to a capability it implements
///
/// Expands to a `CapabilityBinding` whose cast narrows an erased `$concrete`
/// to `Box<$capability>`.
///
/// ```ignore
/// capabilities: &[typedex_application::implements!(Cat => dyn Animal)],
/// ```
#[macro_export]
macro_rules! implements {
    ($concrete:ty => $capability:ty) => {
        $crate::registry::CapabilityBinding::new(
            <$capability as $crate::registry::Capability>::ID,
            |value| match value.downcast::<$concrete>() {
                ::std::result::Result::Ok(concrete) => {
                    let narrowed: ::std::boxed::Box<$capability> = concrete;
                    ::std::result::Result::Ok(
                        ::std::boxed::Box::new(narrowed) as ::std::boxed::Box<dyn ::std::any::Any>
                    )
                }
                ::std::result::Result::Err(value) => ::std::result::Result::Err(value),
            },
        )
    };
}
