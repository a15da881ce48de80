//! Type metadata records.

use std::any::TypeId;

use crate::ctor::zero_thunk;
use crate::{ConstructorInfo, NewFn, TypeFlags, TypeKind, UnsupportedReason, Zero};

/// Everything the dynamic construction path knows about a type.
///
/// Built by [`Describe::describe`](crate::Describe::describe) and interned
/// behind a [`TypeHandle`](crate::TypeHandle).
#[derive(Clone, Debug)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
    flags: TypeFlags,
    constructors: Vec<ConstructorInfo>,
    zero: Option<NewFn>,
}

impl TypeInfo {
    /// Bare metadata for `T`: no constructors, no zero value, no flags.
    pub fn new<T: ?Sized + 'static>(kind: TypeKind) -> Self {
        TypeInfo {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind,
            flags: TypeFlags::empty(),
            constructors: Vec::new(),
            zero: None,
        }
    }

    /// A reference type with no constructors yet.
    pub fn reference<T: ?Sized + 'static>() -> Self {
        Self::new::<T>(TypeKind::Reference)
    }

    /// A reference type whose public parameterless constructor is `T::default`.
    pub fn constructible<T: Default + Send + 'static>() -> Self {
        Self::reference::<T>().with_constructor(ConstructorInfo::default_of::<T>())
    }

    /// A value type whose default instance is `T::ZERO`.
    pub fn value<T: Zero>() -> Self {
        Self::new::<T>(TypeKind::Value).with_zero(zero_thunk::<T>)
    }

    /// A type that can never be instantiated.
    pub fn abstract_type<T: ?Sized + 'static>() -> Self {
        Self::reference::<T>().with_flags(TypeFlags::ABSTRACT)
    }

    #[must_use]
    pub fn with_constructor(mut self, ctor: ConstructorInfo) -> Self {
        self.constructors.push(ctor);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TypeFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_zero(mut self, zero: NewFn) -> Self {
        self.zero = Some(zero);
        self
    }

    /// Stamp `T`'s identity onto this record.
    ///
    /// Interning calls this so a handle's identity always comes from the
    /// type it was requested for, not from what `describe` reported.
    pub(crate) fn identify<T: ?Sized + 'static>(mut self) -> Self {
        self.id = TypeId::of::<T>();
        self.name = std::any::type_name::<T>();
        self
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    #[inline]
    pub fn is_value_type(&self) -> bool {
        self.kind.is_value()
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.flags.contains(TypeFlags::ABSTRACT)
    }

    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// Thunk producing the zero value, for value types that have one.
    #[inline]
    pub fn zero_thunk(&self) -> Option<NewFn> {
        self.zero
    }

    /// Find the public parameterless constructor.
    ///
    /// Scans the constructor table; callers on a hot path should resolve once
    /// and keep the returned thunk.
    pub fn resolve_constructor(&self) -> Result<NewFn, UnsupportedReason> {
        if self.is_abstract() {
            return Err(UnsupportedReason::Abstract);
        }

        let mut private = false;
        for ctor in &self.constructors {
            let Some(new) = ctor.thunk() else { continue };
            if ctor.is_accessible() {
                return Ok(new);
            }
            private = true;
        }

        Err(if private {
            UnsupportedReason::ConstructorNotAccessible
        } else {
            UnsupportedReason::NoParameterlessConstructor
        })
    }
}
