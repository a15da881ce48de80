//! The `Describe` trait and metadata for standard library types.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::num::{NonZeroI32, NonZeroI64, NonZeroU32, NonZeroU64, NonZeroUsize};

use crate::{TypeInfo, TypeKind, Zero};

/// Types that can report their own construction metadata.
///
/// Implement with [`describe_reference!`](crate::describe_reference),
/// [`describe_value!`](crate::describe_value) or
/// [`describe_abstract!`](crate::describe_abstract), or by hand when a type
/// has unusual constructors.
///
/// `describe` runs at most once per type per process (the result is
/// interned). The interned record's id and name are always those of `Self`,
/// whatever `describe` reports; only the kind, flags, constructors and zero
/// value are taken from it.
pub trait Describe: 'static {
    fn describe() -> TypeInfo;
}

macro_rules! describe_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeInfo {
                    TypeInfo::value::<$ty>()
                }
            }
        )*
    };
}

describe_primitives!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

// Value types without a zero representation.
macro_rules! describe_nonzero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeInfo {
                    TypeInfo::new::<$ty>(TypeKind::Value)
                }
            }
        )*
    };
}

describe_nonzero!(NonZeroI32, NonZeroI64, NonZeroU32, NonZeroU64, NonZeroUsize);

impl Describe for String {
    fn describe() -> TypeInfo {
        TypeInfo::constructible::<String>()
    }
}

macro_rules! describe_collections {
    ($($ty:ident < $($param:ident),+ >),* $(,)?) => {
        $(
            impl<$($param: Send + 'static),+> Describe for $ty<$($param),+> {
                fn describe() -> TypeInfo {
                    TypeInfo::constructible::<Self>()
                }
            }
        )*
    };
}

describe_collections!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T>,
    BTreeSet<T>,
    HashMap<K, V>,
    BTreeMap<K, V>,
);

impl<T: Zero> Describe for Option<T> {
    fn describe() -> TypeInfo {
        TypeInfo::value::<Self>()
    }
}

impl<T: Zero, const N: usize> Describe for [T; N] {
    fn describe() -> TypeInfo {
        TypeInfo::value::<Self>()
    }
}

impl<A: Zero, B: Zero> Describe for (A, B) {
    fn describe() -> TypeInfo {
        TypeInfo::value::<Self>()
    }
}

impl<A: Zero, B: Zero, C: Zero> Describe for (A, B, C) {
    fn describe() -> TypeInfo {
        TypeInfo::value::<Self>()
    }
}

impl<A: Zero, B: Zero, C: Zero, D: Zero> Describe for (A, B, C, D) {
    fn describe() -> TypeInfo {
        TypeInfo::value::<Self>()
    }
}
