//! The construction dispatcher.

use std::fmt;

use act_compile::{CodegenCapability, Construct, FactoryCompiler};
use act_types::{
    default_thunk, ActivationError, HostActivator, Instance, ReflectiveActivator, TypeHandle,
};

use crate::{ActivatorConfig, FactoryCache};

/// Constructs default instances of static and run-time types.
///
/// Owns the factory cache for the dynamic entry point. Build one per
/// application (or per test), or use the process-wide [`global`](crate::global)
/// instance through the crate's free functions.
pub struct Activator {
    config: ActivatorConfig,
    compiler: FactoryCompiler,
    cache: FactoryCache,
    host: Box<dyn HostActivator>,
}

impl Activator {
    /// Create an activator that falls back to [`ReflectiveActivator`].
    pub fn new(config: ActivatorConfig) -> Self {
        Self::with_host(config, ReflectiveActivator)
    }

    /// Create an activator with a custom fallback primitive.
    pub fn with_host(config: ActivatorConfig, host: impl HostActivator + 'static) -> Self {
        Activator {
            compiler: FactoryCompiler::new(config.capability()),
            cache: FactoryCache::with_capacity(config.initial_capacity),
            host: Box::new(host),
            config,
        }
    }

    pub fn config(&self) -> &ActivatorConfig {
        &self.config
    }

    #[inline]
    pub fn capability(&self) -> CodegenCapability {
        self.compiler.capability()
    }

    pub fn cache(&self) -> &FactoryCache {
        &self.cache
    }

    /// Construct a default `T`.
    ///
    /// # Panics
    /// Panics only on the fallback path, if the host primitive fails or
    /// produces another type. Use [`try_create`] to handle that case.
    ///
    /// [`try_create`]: Self::try_create
    #[inline]
    pub fn create<T: Construct>(&self) -> T {
        self.try_create().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Construct a default `T`, reporting fallback failures.
    ///
    /// Both capability modes run `T`'s own `Default`: directly when synthesis
    /// is available, through the host's primitive otherwise.
    #[inline]
    pub fn try_create<T: Construct>(&self) -> Result<T, ActivationError> {
        if self.capability().is_available() {
            return Ok(T::FACTORY.invoke());
        }

        let ty = TypeHandle::of::<T>();
        let instance = self.host.instantiate_default(ty, default_thunk::<T>)?;
        let found = instance.type_name();
        instance
            .downcast::<T>()
            .map_err(|_| ActivationError::TypeMismatch {
                expected: ty.name(),
                found,
            })
    }

    /// Construct a default instance of the type `ty` denotes.
    ///
    /// The first call for a type compiles and caches its factory; later calls
    /// invoke the cached factory directly.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `ty` is invalid
    /// - `UnsupportedType` if the type cannot be default-constructed, on
    ///   every call (failures are never cached)
    /// - `TypeMismatch` if the type's `Describe` metadata constructs some
    ///   other type
    pub fn create_instance(&self, ty: TypeHandle) -> Result<Instance, ActivationError> {
        let instance = match self.cache.get(ty) {
            Some(factory) => factory.invoke(),
            None => self.create_uncached(ty)?,
        };
        check_type(ty, instance)
    }

    #[cold]
    fn create_uncached(&self, ty: TypeHandle) -> Result<Instance, ActivationError> {
        let factory = match self.compiler.compile(ty) {
            Ok(factory) => factory,
            Err(err) if err.is_fallback_trigger() => {
                tracing::debug!(ty = ty.name(), %err, "falling back to host activator");
                return self.host.instantiate(ty);
            }
            Err(err) => return Err(err),
        };

        let (_, inserted) = self.cache.insert_if_absent(factory);
        if inserted {
            tracing::debug!(ty = ty.name(), shape = ?factory.shape(), "factory cached");
        } else {
            tracing::debug!(ty = ty.name(), "discarding factory compiled by a racing caller");
        }

        Ok(factory.invoke())
    }
}

/// Reject an instance of another type than the one `ty` denotes.
#[inline]
fn check_type(ty: TypeHandle, instance: Instance) -> Result<Instance, ActivationError> {
    if ty.type_id() == Some(instance.type_id()) {
        Ok(instance)
    } else {
        Err(ActivationError::TypeMismatch {
            expected: ty.name(),
            found: instance.type_name(),
        })
    }
}

impl Default for Activator {
    fn default() -> Self {
        Self::new(ActivatorConfig::default())
    }
}

impl fmt::Debug for Activator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activator")
            .field("config", &self.config)
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}
