pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
mod tests;

// Re-export core components
pub use config::{ ConfigError, FieldLimits, RegistryConfig };
pub use errors::{ RegistryError, RegistryResult };
pub use implementations::{
    query::PropertySearch,
    registry::Registry,
    snapshot::RegistrySnapshot,
};
pub use models::{
    common::{ LocationId, Principal, PropertyId, PropertyTypeId },
    outcome::CallResult,
    property::{ NewProperty, Property, PropertyStatus },
    reference::{ Location, NewLocation, PropertyType },
    search::SearchCriteria,
};
pub use traits::{ PropertyRegistry, ReferenceResolver };
