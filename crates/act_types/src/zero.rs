//! Canonical zero values for value types.

/// A value type with a canonical all-zero representation.
///
/// This is the value a value type takes when no constructor runs: `0` for
/// integers, `false`, `'\0'`, `None`, and element-wise zero for arrays and
/// tuples. It is not necessarily the same as `Default`.
pub trait Zero: Copy + Send + 'static {
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_zero! {
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
    bool => false,
    char => '\0',
    () => (),
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}

impl<T: Copy + Send + 'static> Zero for Option<T> {
    const ZERO: Self = None;
}

impl<A: Zero, B: Zero> Zero for (A, B) {
    const ZERO: Self = (A::ZERO, B::ZERO);
}

impl<A: Zero, B: Zero, C: Zero> Zero for (A, B, C) {
    const ZERO: Self = (A::ZERO, B::ZERO, C::ZERO);
}

impl<A: Zero, B: Zero, C: Zero, D: Zero> Zero for (A, B, C, D) {
    const ZERO: Self = (A::ZERO, B::ZERO, C::ZERO, D::ZERO);
}
