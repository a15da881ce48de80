//! Compiled factories.

use std::any::TypeId;
use std::fmt;

use act_types::{Instance, NewFn, TypeInfo};

/// Factory for a statically known `T`.
pub struct Factory<T> {
    new: fn() -> T,
}

impl<T> Factory<T> {
    pub const fn new(new: fn() -> T) -> Self {
        Factory { new }
    }

    #[inline]
    pub fn invoke(&self) -> T {
        (self.new)()
    }
}

impl<T> Clone for Factory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Factory<T> {}

impl<T> fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factory<{}>", std::any::type_name::<T>())
    }
}

/// Which branch of the compiler produced a factory.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FactoryShape {
    /// Calls the type's public parameterless constructor.
    Construct,
    /// Produces the type's zero value without running a constructor.
    ZeroInit,
}

/// Factory for a type known only at run time.
///
/// Holds a resolved function pointer; invoking it performs no lookup.
/// Only [`FactoryCompiler`](crate::FactoryCompiler) creates these.
#[derive(Copy, Clone)]
pub struct DynFactory {
    new: NewFn,
    type_id: TypeId,
    type_name: &'static str,
    shape: FactoryShape,
}

impl DynFactory {
    pub(crate) fn new(new: NewFn, info: &TypeInfo, shape: FactoryShape) -> Self {
        DynFactory {
            new,
            type_id: info.id(),
            type_name: info.name(),
            shape,
        }
    }

    #[inline]
    pub fn invoke(&self) -> Instance {
        (self.new)()
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn shape(&self) -> FactoryShape {
        self.shape
    }
}

impl fmt::Debug for DynFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynFactory")
            .field("type", &self.type_name)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
