//! Whether factory synthesis is permitted in this environment.

/// Availability of per-type factory synthesis.
///
/// When `Unavailable`, every construction goes through the host's reflective
/// primitive instead of a compiled factory.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CodegenCapability {
    #[default]
    Available,
    Unavailable,
}

impl CodegenCapability {
    #[inline]
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled {
            CodegenCapability::Available
        } else {
            CodegenCapability::Unavailable
        }
    }

    #[inline]
    pub const fn is_available(self) -> bool {
        matches!(self, CodegenCapability::Available)
    }
}
