//! Concurrent factory cache.
//!
//! Maps a type's `TypeId` to its compiled [`DynFactory`]. Entries are
//! inserted at most once per type and never replaced or removed, so the
//! table grows monotonically with the number of distinct types constructed.
//!
//! # Thread Safety
//! Backed by a `DashMap`: hits take a single shard's read lock, and
//! insert-if-absent holds one shard's write lock only for the insertion
//! itself. Factories are compiled by the caller before inserting, never while
//! a lock is held.

use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};

use act_compile::DynFactory;
use act_types::TypeHandle;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

/// Memoization table of compiled factories.
pub struct FactoryCache {
    factories: DashMap<TypeId, DynFactory, FxBuildHasher>,
    /// Factories offered for insertion, including race losers.
    compilations: AtomicUsize,
}

impl FactoryCache {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FactoryCache {
            factories: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            compilations: AtomicUsize::new(0),
        }
    }

    /// Cached factory for `ty`, if any.
    #[inline]
    pub fn get(&self, ty: TypeHandle) -> Option<DynFactory> {
        let id = ty.type_id()?;
        self.factories.get(&id).map(|entry| *entry)
    }

    /// Store `factory` unless its type already has one.
    ///
    /// Returns the factory that is cached after the call and whether this
    /// call inserted it. A caller that lost the race gets the winner back.
    pub fn insert_if_absent(&self, factory: DynFactory) -> (DynFactory, bool) {
        self.compilations.fetch_add(1, Ordering::Relaxed);

        match self.factories.entry(factory.type_id()) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                entry.insert(factory);
                (factory, true)
            }
        }
    }

    pub fn contains(&self, ty: TypeHandle) -> bool {
        ty.type_id()
            .is_some_and(|id| self.factories.contains_key(&id))
    }

    /// Number of cached factories (one per distinct type).
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Number of factories ever offered to the cache.
    ///
    /// Exceeds [`len`](Self::len) only when concurrent callers compiled the
    /// same type redundantly.
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }
}

impl Default for FactoryCache {
    fn default() -> Self {
        Self::new()
    }
}
