use chrono::Utc;
use log::{ debug, info };
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::errors::{ RegistryError, RegistryResult };
use crate::models::common::{ LocationId, PropertyTypeId };
use crate::models::reference::{ Location, NewLocation, PropertyType };
use crate::traits::reference_resolver::ReferenceResolver;

/// Id-keyed records with a counter advanced only on insert
#[derive(Debug)]
pub(crate) struct Catalog<T> {
    entries: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Clone> Catalog<T> {
    fn new() -> Self {
        Self { entries: BTreeMap::new(), next_id: 1 }
    }

    /// Rebuild from persisted parts; the counter must be past every stored id
    fn from_parts(
        entries: impl IntoIterator<Item = (u64, T)>,
        next_id: u64,
        kind: &str
    ) -> RegistryResult<Self> {
        let mut map = BTreeMap::new();
        for (id, entry) in entries {
            if map.insert(id, entry).is_some() {
                return Err(RegistryError::Snapshot(format!("{} id {} appears twice", kind, id)));
            }
        }
        let entries = map;
        if entries.contains_key(&0) {
            return Err(RegistryError::Snapshot(format!("{} id 0 is not allowed", kind)));
        }
        let highest = entries.keys().next_back().copied().unwrap_or(0);
        if next_id <= highest {
            return Err(
                RegistryError::Snapshot(
                    format!("{} counter {} does not exceed highest id {}", kind, next_id, highest)
                )
            );
        }
        Ok(Self { entries, next_id })
    }

    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> u64 {
        let id = self.next_id;
        self.entries.insert(id, build(id));
        self.next_id += 1;
        id
    }

    fn get(&self, id: u64) -> Option<&T> {
        self.entries.get(&id)
    }

    fn values(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }
}

/// Property type and location catalogs, each numbered independently
#[derive(Debug)]
pub struct ReferenceDataStore {
    property_types: RwLock<Catalog<PropertyType>>,
    locations: RwLock<Catalog<Location>>,
}

impl Default for ReferenceDataStore {
    fn default() -> Self {
        Self {
            property_types: RwLock::new(Catalog::new()),
            locations: RwLock::new(Catalog::new()),
        }
    }
}

impl ReferenceDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        property_types: Vec<PropertyType>,
        next_property_type_id: PropertyTypeId,
        locations: Vec<Location>,
        next_location_id: LocationId
    ) -> RegistryResult<Self> {
        let property_types = Catalog::from_parts(
            property_types.into_iter().map(|t| (t.id, t)),
            next_property_type_id,
            "property type"
        )?;
        let locations = Catalog::from_parts(
            locations.into_iter().map(|l| (l.id, l)),
            next_location_id,
            "location"
        )?;
        Ok(Self {
            property_types: RwLock::new(property_types),
            locations: RwLock::new(locations),
        })
    }

    /// Store an already validated property type
    pub(crate) fn insert_property_type(
        &self,
        name: &str,
        description: &str
    ) -> RegistryResult<PropertyTypeId> {
        let mut catalog = self.property_types
            .write()
            .map_err(|_| RegistryError::Poisoned("property types"))?;
        let id = catalog.insert_with(|id| PropertyType {
            id,
            name: name.to_string(),
            description: description.to_string(),
            active: true,
            registered_at: Utc::now(),
        });
        info!("Registered property type {} ({})", id, name);
        Ok(id)
    }

    /// Store an already validated location
    pub(crate) fn insert_location(&self, location: NewLocation) -> RegistryResult<LocationId> {
        let mut catalog = self.locations.write().map_err(|_| RegistryError::Poisoned("locations"))?;
        let id = catalog.insert_with(|id| Location {
            id,
            city: location.city,
            state: location.state,
            zip_code: location.zip_code,
            neighborhood: location.neighborhood,
            active: true,
            registered_at: Utc::now(),
        });
        info!("Registered location {}", id);
        Ok(id)
    }

    pub fn get_property_type(&self, id: PropertyTypeId) -> RegistryResult<PropertyType> {
        debug!("Looking up property type {}", id);
        let catalog = self.property_types
            .read()
            .map_err(|_| RegistryError::Poisoned("property types"))?;
        catalog
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("property type {}", id)))
    }

    pub fn get_location(&self, id: LocationId) -> RegistryResult<Location> {
        debug!("Looking up location {}", id);
        let catalog = self.locations.read().map_err(|_| RegistryError::Poisoned("locations"))?;
        catalog
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("location {}", id)))
    }

    /// All property types with the counter, for snapshots
    pub(crate) fn export_property_types(
        &self
    ) -> RegistryResult<(Vec<PropertyType>, PropertyTypeId)> {
        let catalog = self.property_types
            .read()
            .map_err(|_| RegistryError::Poisoned("property types"))?;
        Ok((catalog.values(), catalog.next_id))
    }

    /// All locations with the counter, for snapshots
    pub(crate) fn export_locations(&self) -> RegistryResult<(Vec<Location>, LocationId)> {
        let catalog = self.locations.read().map_err(|_| RegistryError::Poisoned("locations"))?;
        Ok((catalog.values(), catalog.next_id))
    }
}

impl ReferenceResolver for ReferenceDataStore {
    fn resolve_property_type(&self, id: PropertyTypeId) -> RegistryResult<()> {
        match self.get_property_type(id)? {
            property_type if property_type.active => Ok(()),
            _ => Err(RegistryError::NotFound(format!("property type {} is inactive", id))),
        }
    }

    fn resolve_location(&self, id: LocationId) -> RegistryResult<()> {
        match self.get_location(id)? {
            location if location.active => Ok(()),
            _ => Err(RegistryError::NotFound(format!("location {} is inactive", id))),
        }
    }
}
