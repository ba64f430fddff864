//! Namespace registries
//!
//! One [`NamespaceRegistry`] per content domain. A registry is filled once at
//! startup and only read afterwards; see `crate::context` for how the filled
//! registries are published to worker threads.

mod definition;
mod namespace_registry;

pub use definition::Definition;
pub use namespace_registry::NamespaceRegistry;
