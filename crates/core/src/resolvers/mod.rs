//! Concrete macro resolvers.

pub mod build_context;
pub mod extension;

pub use build_context::BuildContextResolver;
pub use extension::ExtensionResolver;
