//! Type-erased constructed instances.

use std::any::{Any, TypeId};
use std::fmt;

/// An owned, freshly constructed instance of some type.
///
/// Returned by the dynamic construction path, where the concrete type is
/// only known as a [`TypeHandle`](crate::TypeHandle). Value types are boxed
/// here the same way reference types are.
pub struct Instance {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl Instance {
    /// Box `value` as an instance.
    #[inline]
    pub fn new<T: Any + Send>(value: T) -> Self {
        Instance {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `TypeId` of the contained value.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Name of the contained value's type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Take the contained value, or give the instance back if it is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Instance { value, type_name }),
        }
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
