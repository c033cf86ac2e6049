//! Macros shared by the port definitions.

/// Define a port error enum with `thiserror` display messages and snake_case
/// constructor helpers.
///
/// Each variant gains a constructor named after its snake_case form. Field
/// arguments accept `impl Into<T>` so call sites can pass string literals
/// without explicit conversions.
macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant, (), (), $($field : $ty),*);
    };
    (@ctor_impl $variant:ident, ($($params:tt)*), ($($inits:tt)*),) => {
        paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };
    (@ctor_impl $variant:ident, ($($params:tt)*), ($($inits:tt)*), $field:ident : $ty:ty $(, $($rest:tt)*)?) => {
        define_port_error!(
            @ctor_impl $variant,
            ($($params)* $field: impl Into<$ty>,),
            ($($inits)* $field: $field.into(),),
            $($($rest)*)?
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;
