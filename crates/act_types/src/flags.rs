//! Type metadata flags.
//!
//! Computed once when a type is described and never recomputed.

use bitflags::bitflags;

bitflags! {
    /// Static properties of a described type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// Cannot be instantiated (trait objects, marker types).
        const ABSTRACT = 1 << 0;
    }
}
