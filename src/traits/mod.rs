pub mod property_registry;
pub mod reference_resolver;

// Re-export traits
pub use property_registry::PropertyRegistry;
pub use reference_resolver::ReferenceResolver;
