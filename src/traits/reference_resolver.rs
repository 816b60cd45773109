use crate::errors::RegistryResult;
use crate::models::common::{ LocationId, PropertyTypeId };

/// Resolves the reference data a property must point at
pub trait ReferenceResolver {
    /// Check that a property type is registered and active
    fn resolve_property_type(&self, id: PropertyTypeId) -> RegistryResult<()>;

    /// Check that a location is registered and active
    fn resolve_location(&self, id: LocationId) -> RegistryResult<()>;
}
