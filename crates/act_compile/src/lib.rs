//! Factory synthesis.
//!
//! Turns a type descriptor into a zero-argument factory that constructs the
//! type without inspecting it again:
//!
//! - Statically known types go through [`Construct::FACTORY`], one
//!   monomorphized `fn() -> T` per type, fixed at compile time.
//! - Run-time types go through [`FactoryCompiler::compile`], which resolves the
//!   type's metadata once and yields a [`DynFactory`] holding a direct
//!   function pointer.
//!
//! Compilation is a pure function of the type. Running it twice for the same
//! type yields equivalent factories; deduplication is the cache's job.

mod capability;
mod compiler;
mod factory;

pub use capability::CodegenCapability;
pub use compiler::{compile_generic, Construct, FactoryCompiler};
pub use factory::{DynFactory, Factory, FactoryShape};
