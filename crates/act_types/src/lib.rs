//! Run-time type metadata for the activator.
//!
//! The dynamic construction path never sees a Rust type parameter, only a
//! [`TypeHandle`]. This crate defines what such a handle points to:
//!
//! - [`TypeInfo`]: the reflection record for one type (kind, flags,
//!   constructors, zero value)
//! - [`Describe`]: the trait that produces a type's `TypeInfo`
//! - [`Instance`]: the owned, type-erased result of a construction
//! - [`HostActivator`]: the always-available reflective instantiation
//!   primitive used when factory synthesis is unavailable
//!
//! # Value vs Reference Types
//!
//! A value type ([`TypeKind::Value`]) has a canonical zero representation
//! (see [`Zero`]) and can be produced without running a constructor. A
//! reference type ([`TypeKind::Reference`]) must be produced by an accessible
//! parameterless constructor.
//!
//! # Metadata Lifetime
//!
//! `TypeInfo` records are interned on first use of [`TypeHandle::of`] and live
//! for the rest of the process, so handles are `Copy` and pointer-sized.

mod ctor;
mod describe;
mod error;
mod flags;
mod handle;
mod info;
mod instance;
mod kind;
mod reflect;
mod zero;

pub use ctor::{default_thunk, zero_thunk, ConstructorInfo, NewFn, Visibility};
pub use describe::Describe;
pub use error::{ActivationError, UnsupportedReason};
pub use flags::TypeFlags;
pub use handle::TypeHandle;
pub use info::TypeInfo;
pub use instance::Instance;
pub use kind::TypeKind;
pub use reflect::{HostActivator, ReflectiveActivator};
pub use zero::Zero;

/// Implement [`Describe`] for reference types constructed through `Default`.
///
/// ```text
/// #[derive(Default)]
/// struct Session { id: u64 }
/// describe_reference!(Session);
/// ```
#[macro_export]
macro_rules! describe_reference {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Describe for $ty {
                fn describe() -> $crate::TypeInfo {
                    $crate::TypeInfo::constructible::<$ty>()
                }
            }
        )+
    };
}

/// Implement [`Describe`] for value types with a [`Zero`] representation.
///
/// Run-time construction yields `ZERO`. The statically typed entry point
/// runs the type's `Default` instead.
#[macro_export]
macro_rules! describe_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Describe for $ty {
                fn describe() -> $crate::TypeInfo {
                    $crate::TypeInfo::value::<$ty>()
                }
            }
        )+
    };
}

/// Implement [`Describe`] for abstract types (trait objects, marker types)
/// that can never be instantiated.
///
/// ```text
/// trait Shape {}
/// describe_abstract!(dyn Shape);
/// ```
#[macro_export]
macro_rules! describe_abstract {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Describe for $ty {
                fn describe() -> $crate::TypeInfo {
                    $crate::TypeInfo::abstract_type::<$ty>()
                }
            }
        )+
    };
}
