use crate::errors::RegistryResult;
use crate::implementations::query::PropertySearch;
use crate::models::common::{ LocationId, Principal, PropertyId, PropertyTypeId };
use crate::models::property::{ NewProperty, Property };
use crate::models::reference::{ Location, NewLocation, PropertyType };
use crate::models::search::SearchCriteria;

/// The operations the registry exposes to external callers (CLI, API, UI).
///
/// Mutating operations take the caller's identity as supplied by the collaborator
/// and run through access control and validation before anything is committed.
/// Reads go straight to the stores.
pub trait PropertyRegistry {
    /// Grant the manager role to the first caller; fails on every later call
    fn initialize(&self, caller: &Principal) -> RegistryResult<()>;

    /// Add a property manager; the caller must already be one
    fn add_manager(&self, caller: &Principal, new_manager: &Principal) -> RegistryResult<()>;

    /// Check whether a principal holds the manager role
    fn is_manager(&self, principal: &Principal) -> RegistryResult<bool>;

    /// Register a property type and return its id
    fn register_property_type(
        &self,
        caller: &Principal,
        name: &str,
        description: &str
    ) -> RegistryResult<PropertyTypeId>;

    /// Register a location and return its id
    fn register_location(
        &self,
        caller: &Principal,
        location: NewLocation
    ) -> RegistryResult<LocationId>;

    /// Register a property owned by the caller and return its id
    fn register_property(
        &self,
        caller: &Principal,
        property: NewProperty
    ) -> RegistryResult<PropertyId>;

    /// Set a property's free units and status together; owner only
    fn update_availability(
        &self,
        caller: &Principal,
        property_id: PropertyId,
        available_units: u32,
        status: &str
    ) -> RegistryResult<()>;

    fn get_property_type(&self, id: PropertyTypeId) -> RegistryResult<PropertyType>;

    fn get_location(&self, id: LocationId) -> RegistryResult<Location>;

    fn get_property(&self, id: PropertyId) -> RegistryResult<Property>;

    /// True iff the property exists, is listed as available, and has a free unit
    fn is_available(&self, id: PropertyId) -> bool;

    /// Lazily iterate the properties matching `criteria` in ascending id order
    fn search_properties(&self, criteria: SearchCriteria) -> PropertySearch<'_>;
}
