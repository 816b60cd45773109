use log::{ debug, error };

use crate::config::RegistryConfig;
use crate::errors::RegistryResult;
use crate::implementations::access_gate::AccessGate;
use crate::implementations::property_ledger::PropertyLedger;
use crate::implementations::query::PropertySearch;
use crate::implementations::reference_store::ReferenceDataStore;
use crate::implementations::role_store::RoleStore;
use crate::implementations::validation;
use crate::models::common::{ LocationId, Principal, PropertyId, PropertyTypeId };
use crate::models::property::{ NewProperty, Property };
use crate::models::reference::{ Location, NewLocation, PropertyType };
use crate::models::search::SearchCriteria;
use crate::traits::property_registry::PropertyRegistry;
use crate::traits::reference_resolver::ReferenceResolver;

/// In-memory property registry.
///
/// Safe to share across threads; every store guards its own state.
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) config: RegistryConfig,
    pub(crate) roles: RoleStore,
    pub(crate) reference: ReferenceDataStore,
    pub(crate) ledger: PropertyLedger,
}

impl Registry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn gate(&self) -> AccessGate<'_> {
        AccessGate::new(&self.roles)
    }

    /// Every current property manager, sorted
    pub fn managers(&self) -> RegistryResult<Vec<Principal>> {
        self.roles.managers()
    }

    pub fn is_initialized(&self) -> RegistryResult<bool> {
        self.roles.is_initialized()
    }

    pub fn property_count(&self) -> RegistryResult<usize> {
        self.ledger.len()
    }
}

impl PropertyRegistry for Registry {
    fn initialize(&self, caller: &Principal) -> RegistryResult<()> {
        self.roles.initialize(caller)
    }

    fn add_manager(&self, caller: &Principal, new_manager: &Principal) -> RegistryResult<()> {
        self.roles.add_manager(caller, new_manager)
    }

    fn is_manager(&self, principal: &Principal) -> RegistryResult<bool> {
        self.roles.is_manager(principal)
    }

    fn register_property_type(
        &self,
        caller: &Principal,
        name: &str,
        description: &str
    ) -> RegistryResult<PropertyTypeId> {
        self.gate().require_manager(caller, "register_property_type")?;
        validation::validate_property_type(name, description, &self.config.limits)?;
        self.reference.insert_property_type(name, description)
    }

    fn register_location(
        &self,
        caller: &Principal,
        location: NewLocation
    ) -> RegistryResult<LocationId> {
        self.gate().require_manager(caller, "register_location")?;
        validation::validate_location(&location, &self.config.limits)?;
        self.reference.insert_location(location)
    }

    fn register_property(
        &self,
        caller: &Principal,
        property: NewProperty
    ) -> RegistryResult<PropertyId> {
        self.reference.resolve_property_type(property.property_type_id)?;
        self.reference.resolve_location(property.location_id)?;
        validation::validate_new_property(&property, &self.config.limits)?;
        self.ledger.insert(caller, property)
    }

    fn update_availability(
        &self,
        caller: &Principal,
        property_id: PropertyId,
        available_units: u32,
        status: &str
    ) -> RegistryResult<()> {
        let gate = self.gate();
        self.ledger.update_availability(property_id, |current| {
            gate.require_owner(caller, current)?;
            let status = validation::validate_availability(current, available_units, status)?;
            Ok((available_units, status))
        })?;
        Ok(())
    }

    fn get_property_type(&self, id: PropertyTypeId) -> RegistryResult<PropertyType> {
        self.reference.get_property_type(id)
    }

    fn get_location(&self, id: LocationId) -> RegistryResult<Location> {
        self.reference.get_location(id)
    }

    fn get_property(&self, id: PropertyId) -> RegistryResult<Property> {
        self.ledger.get(id)
    }

    fn is_available(&self, id: PropertyId) -> bool {
        match self.ledger.get(id) {
            Ok(property) => property.is_available(),
            Err(e) if e.is_client_error() => {
                debug!("Availability check for property {}: {}", id, e);
                false
            }
            Err(e) => {
                error!("Availability check for property {} failed: {}", id, e);
                false
            }
        }
    }

    fn search_properties(&self, criteria: SearchCriteria) -> PropertySearch<'_> {
        PropertySearch::new(&self.ledger, criteria)
    }
}
