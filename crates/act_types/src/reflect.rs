//! The host's reflective instantiation primitive.
//!
//! This is the slow path: every call re-reads the type's metadata (kind,
//! flags, constructor table) before constructing. It is always available,
//! which makes it the fallback whenever factory synthesis is not.

use crate::{ActivationError, Instance, NewFn, TypeHandle, TypeKind, UnsupportedReason};

/// A generic "create a default instance of this type" primitive.
pub trait HostActivator: Send + Sync {
    /// Default instance of the type `ty` denotes, known only at run time.
    fn instantiate(&self, ty: TypeHandle) -> Result<Instance, ActivationError>;

    /// Default instance of a statically known type whose own parameterless
    /// constructor is `default`.
    ///
    /// The provided implementation validates `ty` and runs `default`.
    fn instantiate_default(
        &self,
        ty: TypeHandle,
        default: NewFn,
    ) -> Result<Instance, ActivationError> {
        ty.resolve()?;
        Ok(default())
    }
}

impl<F> HostActivator for F
where
    F: Fn(TypeHandle) -> Result<Instance, ActivationError> + Send + Sync,
{
    fn instantiate(&self, ty: TypeHandle) -> Result<Instance, ActivationError> {
        self(ty)
    }
}

/// Metadata-driven instantiation, resolved on every call.
///
/// Value types produce their zero value, whatever constructors they declare.
/// Only a value type without a zero value runs its public parameterless
/// constructor. Reference types run their public parameterless constructor.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReflectiveActivator;

impl HostActivator for ReflectiveActivator {
    fn instantiate(&self, ty: TypeHandle) -> Result<Instance, ActivationError> {
        let info = ty.resolve()?;
        match info.kind() {
            TypeKind::Value => match info.zero_thunk() {
                Some(zero) => Ok(zero()),
                None => info.resolve_constructor().map(|new| new()).map_err(|_| {
                    ActivationError::unsupported(info.name(), UnsupportedReason::NoZeroValue)
                }),
            },
            TypeKind::Reference => info
                .resolve_constructor()
                .map(|new| new())
                .map_err(|reason| ActivationError::unsupported(info.name(), reason)),
        }
    }
}
