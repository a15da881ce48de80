//! Constructor metadata.

use crate::{Instance, Zero};

/// A zero-argument construction thunk.
///
/// Thunks are ordinary monomorphized functions: `default_thunk::<Vec<u8>>`
/// is compiled once, ahead of time, and calling it performs no type
/// inspection.
pub type NewFn = fn() -> Instance;

/// Construct `T` through its `Default` implementation and box it.
pub fn default_thunk<T: Default + Send + 'static>() -> Instance {
    Instance::new(T::default())
}

/// Produce the zero value of `T` and box it.
pub fn zero_thunk<T: Zero>() -> Instance {
    Instance::new(T::ZERO)
}

/// Accessibility of a constructor from outside the type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Public,
    Private,
}

/// One constructor of a described type.
///
/// Parameterized constructors are recorded so that "has constructors, but
/// none without parameters" is representable. They are never invoked, so
/// only parameterless constructors carry a thunk.
#[derive(Clone, Debug)]
pub struct ConstructorInfo {
    visibility: Visibility,
    params: &'static [&'static str],
    new: Option<NewFn>,
}

impl ConstructorInfo {
    /// A parameterless constructor invoking `new`.
    pub const fn parameterless(visibility: Visibility, new: NewFn) -> Self {
        ConstructorInfo {
            visibility,
            params: &[],
            new: Some(new),
        }
    }

    /// The public parameterless constructor backed by `T::default`.
    pub fn default_of<T: Default + Send + 'static>() -> Self {
        Self::parameterless(Visibility::Public, default_thunk::<T>)
    }

    /// A constructor taking parameters of the given type names.
    pub const fn with_params(visibility: Visibility, params: &'static [&'static str]) -> Self {
        ConstructorInfo {
            visibility,
            params,
            new: None,
        }
    }

    /// Number of parameters the constructor takes.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub const fn is_accessible(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    /// The invocation thunk, present only for parameterless constructors.
    #[inline]
    pub const fn thunk(&self) -> Option<NewFn> {
        self.new
    }
}
