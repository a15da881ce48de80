//! Cached default-instance construction.
//!
//! Two entry points construct a fresh default instance of a type:
//!
//! - [`Activator::create`]`::<T>()` when the type is known at compile time.
//!   It calls `T`'s monomorphized factory directly, with no cache and no lock.
//! - [`Activator::create_instance`]`(handle)` when the type is only known as a
//!   [`TypeHandle`]. The first call for a type compiles a factory and caches
//!   it, so the factory is compiled at most once per type.
//!
//! When factory synthesis is disabled (see [`ActivatorConfig`]), both entry
//! points delegate to the host's reflective primitive instead.
//!
//! # Example
//!
//! ```text
//! let activator = Activator::default();
//! let names: Vec<String> = activator.create();
//! let zero = activator.create_instance(TypeHandle::of::<i32>())?;
//! assert_eq!(zero.downcast::<i32>().ok(), Some(0));
//! ```

mod activator;
mod cache;
mod config;

pub use activator::Activator;
pub use cache::FactoryCache;
pub use config::{ActivatorConfig, CACHE_CAPACITY_ENV, DYNAMIC_CODE_ENV};

pub use act_compile::{CodegenCapability, Construct, DynFactory, Factory, FactoryShape};
pub use act_types::{
    describe_abstract, describe_reference, describe_value, ActivationError, ConstructorInfo,
    Describe, HostActivator, Instance, ReflectiveActivator, TypeFlags, TypeHandle, TypeInfo,
    TypeKind, UnsupportedReason, Visibility, Zero,
};

use std::sync::{Once, OnceLock};

/// Process-wide activator behind the free functions.
static GLOBAL: OnceLock<Activator> = OnceLock::new();

static TRACING_INIT: Once = Once::new();

/// The process-wide activator, configured from the environment on first use.
pub fn global() -> &'static Activator {
    GLOBAL.get_or_init(|| Activator::new(ActivatorConfig::from_env()))
}

/// Construct a default `T` with the process-wide activator.
#[inline]
pub fn create<T: Construct>() -> T {
    global().create()
}

/// Construct a default instance of `ty` with the process-wide activator.
#[inline]
pub fn create_instance(ty: TypeHandle) -> Result<Instance, ActivationError> {
    global().create_instance(ty)
}

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=activator=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
