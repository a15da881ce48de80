//! Interned run-time type handles.
//!
//! A [`TypeHandle`] is the dynamic construction path's only view of a type.
//! Handles are obtained through [`TypeHandle::of`], which interns the type's
//! [`TypeInfo`] in a process-wide table on first use.
//!
//! # Thread Safety
//! The table is a `DashMap` (per-shard `RwLock`s). Lookups of already
//! interned types take a shard read lock only.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::{ActivationError, Describe, TypeInfo};

/// Process-wide table of described types.
static TYPE_TABLE: OnceLock<TypeTable> = OnceLock::new();

/// Interned `TypeInfo` records, keyed by `TypeId`.
///
/// Records are leaked to get a `'static` lifetime; they are never removed.
struct TypeTable {
    infos: DashMap<TypeId, &'static TypeInfo, FxBuildHasher>,
}

impl TypeTable {
    fn global() -> &'static TypeTable {
        TYPE_TABLE.get_or_init(|| TypeTable {
            infos: DashMap::with_hasher(FxBuildHasher),
        })
    }

    fn intern<T: Describe + ?Sized>(&self) -> &'static TypeInfo {
        let id = TypeId::of::<T>();

        // Fast path: already interned
        if let Some(info) = self.infos.get(&id) {
            return *info;
        }

        // Describe outside the shard lock; `describe` may itself ask for handles.
        // Identity is `T`'s own, never what the description claims.
        let info = T::describe().identify::<T>();

        match self.infos.entry(id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let leaked: &'static TypeInfo = Box::leak(Box::new(info));
                entry.insert(leaked);
                leaked
            }
        }
    }

    fn len(&self) -> usize {
        self.infos.len()
    }
}

/// Opaque handle to a type known at run time.
///
/// Two handles are equal iff they denote the same type. The distinguished
/// [`TypeHandle::INVALID`] denotes no type and equals only itself.
#[derive(Copy, Clone)]
pub struct TypeHandle {
    info: Option<&'static TypeInfo>,
}

impl TypeHandle {
    /// Handle denoting no type.
    pub const INVALID: TypeHandle = TypeHandle { info: None };

    /// Handle for `T`, describing and interning `T` on first use.
    pub fn of<T: Describe + ?Sized>() -> Self {
        TypeHandle {
            info: Some(TypeTable::global().intern::<T>()),
        }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.info.is_some()
    }

    #[inline]
    pub fn info(self) -> Option<&'static TypeInfo> {
        self.info
    }

    /// Metadata for this handle, or `InvalidArgument`.
    #[inline]
    pub fn resolve(self) -> Result<&'static TypeInfo, ActivationError> {
        self.info.ok_or(ActivationError::InvalidArgument)
    }

    #[inline]
    pub fn type_id(self) -> Option<TypeId> {
        self.info.map(TypeInfo::id)
    }

    /// Type name, or `"<invalid>"`.
    pub fn name(self) -> &'static str {
        self.info.map_or("<invalid>", TypeInfo::name)
    }

    pub fn is_value_type(self) -> bool {
        self.info.is_some_and(TypeInfo::is_value_type)
    }

    /// Number of types interned so far in this process.
    pub fn interned_count() -> usize {
        TYPE_TABLE.get().map_or(0, TypeTable::len)
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id().hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.info {
            Some(info) => write!(f, "TypeHandle({})", info.name()),
            None => write!(f, "TypeHandle::INVALID"),
        }
    }
}
