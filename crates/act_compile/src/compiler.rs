//! The factory compiler.

use act_types::{ActivationError, Describe, TypeHandle, TypeInfo, TypeKind, UnsupportedReason};

use crate::{CodegenCapability, DynFactory, Factory, FactoryShape};

/// Factory for a statically known `T`, backed by `T::default`.
///
/// `const` so it can seed [`Construct::FACTORY`].
pub const fn compile_generic<T: Default>() -> Factory<T> {
    Factory::new(T::default)
}

/// Types the statically typed entry point can construct.
///
/// Implemented for every `Describe + Default + Send` type. The associated
/// constant is materialized once per type by monomorphization, so no lock or
/// lookup stands between a caller and the constructor.
pub trait Construct: Describe + Default + Send {
    const FACTORY: Factory<Self>;
}

impl<T: Describe + Default + Send> Construct for T {
    const FACTORY: Factory<Self> = compile_generic::<T>();
}

/// Compiles factories for run-time type handles.
#[derive(Copy, Clone, Debug, Default)]
pub struct FactoryCompiler {
    capability: CodegenCapability,
}

impl FactoryCompiler {
    pub const fn new(capability: CodegenCapability) -> Self {
        FactoryCompiler { capability }
    }

    #[inline]
    pub const fn capability(&self) -> CodegenCapability {
        self.capability
    }

    /// Compile a factory for `ty`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `ty` is invalid
    /// - `SynthesisFailure` if synthesis is unavailable
    /// - `UnsupportedType` if the type has no way to be default-constructed
    #[tracing::instrument(level = "trace", skip_all, fields(ty = ty.name()))]
    pub fn compile(&self, ty: TypeHandle) -> Result<DynFactory, ActivationError> {
        let info = ty.resolve()?;

        if !self.capability.is_available() {
            return Err(ActivationError::SynthesisFailure {
                name: info.name(),
                reason: "dynamic code generation is unavailable",
            });
        }

        let factory = match info.kind() {
            TypeKind::Value => compile_value_type(info)?,
            TypeKind::Reference => compile_reference_type(info)?,
        };
        tracing::trace!(shape = ?factory.shape(), "factory compiled");
        Ok(factory)
    }
}

/// Value types are zero-initialized, whatever constructors they declare.
///
/// Only a value type without a zero representation falls back to its public
/// parameterless constructor.
fn compile_value_type(info: &TypeInfo) -> Result<DynFactory, ActivationError> {
    if let Some(zero) = info.zero_thunk() {
        return Ok(DynFactory::new(zero, info, FactoryShape::ZeroInit));
    }

    info.resolve_constructor()
        .map(|new| DynFactory::new(new, info, FactoryShape::Construct))
        .map_err(|_| ActivationError::UnsupportedType {
            name: info.name(),
            reason: UnsupportedReason::NoZeroValue,
        })
}

fn compile_reference_type(info: &TypeInfo) -> Result<DynFactory, ActivationError> {
    info.resolve_constructor()
        .map(|new| DynFactory::new(new, info, FactoryShape::Construct))
        .map_err(|reason| ActivationError::UnsupportedType {
            name: info.name(),
            reason,
        })
}
