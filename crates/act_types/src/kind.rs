//! Value/reference classification.

/// How a type's default instance is produced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// Has a canonical zero representation; no constructor is required.
    Value,
    /// Requires an accessible parameterless constructor.
    Reference,
}

impl TypeKind {
    #[inline]
    pub const fn is_value(self) -> bool {
        matches!(self, TypeKind::Value)
    }
}
