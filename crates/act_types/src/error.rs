//! Construction errors.

use std::fmt;

/// Why a type cannot be default-constructed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnsupportedReason {
    /// The type is abstract and has no instances of its own.
    Abstract,
    /// A reference type without any parameterless constructor.
    NoParameterlessConstructor,
    /// A parameterless constructor exists but is not public.
    ConstructorNotAccessible,
    /// A value type with no zero representation and no public parameterless
    /// constructor (e.g. `NonZeroU32`).
    NoZeroValue,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::Abstract => write!(f, "type is abstract"),
            UnsupportedReason::NoParameterlessConstructor => {
                write!(f, "no parameterless constructor")
            }
            UnsupportedReason::ConstructorNotAccessible => {
                write!(f, "parameterless constructor is not accessible")
            }
            UnsupportedReason::NoZeroValue => write!(f, "value type has no zero value"),
        }
    }
}

/// Error raised by a construction entry point.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActivationError {
    /// The type handle does not denote a type.
    #[error("invalid type handle")]
    InvalidArgument,

    /// The type cannot be default-constructed. Retrying will not help.
    #[error("cannot construct `{name}`: {reason}")]
    UnsupportedType {
        name: &'static str,
        reason: UnsupportedReason,
    },

    /// Factory synthesis is unavailable or failed. Dispatchers fall back to
    /// the host's reflective primitive instead of reporting this.
    #[error("factory synthesis failed for `{name}`: {reason}")]
    SynthesisFailure {
        name: &'static str,
        reason: &'static str,
    },

    /// The host primitive produced an instance of another type than the one
    /// requested, which means the type's `Describe` metadata is inconsistent.
    #[error("expected an instance of `{expected}`, got `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ActivationError {
    /// Whether the dispatcher should retry through the host primitive.
    #[inline]
    pub fn is_fallback_trigger(&self) -> bool {
        matches!(self, ActivationError::SynthesisFailure { .. })
    }

    pub(crate) fn unsupported(name: &'static str, reason: UnsupportedReason) -> Self {
        ActivationError::UnsupportedType { name, reason }
    }
}
