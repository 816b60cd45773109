use chrono::{ DateTime, Utc };
use log::info;
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;

use crate::config::RegistryConfig;
use crate::errors::{ RegistryError, RegistryResult };
use crate::implementations::property_ledger::PropertyLedger;
use crate::implementations::reference_store::ReferenceDataStore;
use crate::implementations::registry::Registry;
use crate::implementations::role_store::RoleStore;
use crate::models::common::{ LocationId, Principal, PropertyId, PropertyTypeId };
use crate::models::property::Property;
use crate::models::reference::{ Location, PropertyType };
use crate::traits::reference_resolver::ReferenceResolver;

/// Complete serialisable state of a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub taken_at: DateTime<Utc>,
    pub initialized: bool,
    pub managers: Vec<Principal>,
    pub property_types: Vec<PropertyType>,
    pub next_property_type_id: PropertyTypeId,
    pub locations: Vec<Location>,
    pub next_location_id: LocationId,
    pub properties: Vec<Property>,
    pub next_property_id: PropertyId,
}

impl Registry {
    /// Copy out the full state.
    ///
    /// Stores are read in dependency order: ledger, then catalogs, then roles.
    /// Catalogs and roles only grow, so every reference in the ledger copy still
    /// resolves in the catalog copies taken after it.
    pub fn snapshot(&self) -> RegistryResult<RegistrySnapshot> {
        let (properties, next_property_id) = self.ledger.export()?;
        let (property_types, next_property_type_id) = self.reference.export_property_types()?;
        let (locations, next_location_id) = self.reference.export_locations()?;
        let (initialized, managers) = self.roles.export()?;
        Ok(RegistrySnapshot {
            taken_at: Utc::now(),
            initialized,
            managers,
            property_types,
            next_property_type_id,
            locations,
            next_location_id,
            properties,
            next_property_id,
        })
    }

    /// Rebuild a registry, re-checking every invariant the live stores maintain
    pub fn restore(snapshot: RegistrySnapshot, config: RegistryConfig) -> RegistryResult<Self> {
        if snapshot.initialized == snapshot.managers.is_empty() {
            return Err(
                RegistryError::Snapshot(
                    "managers must be present exactly when the registry is initialized".to_string()
                )
            );
        }

        let reference = ReferenceDataStore::from_parts(
            snapshot.property_types,
            snapshot.next_property_type_id,
            snapshot.locations,
            snapshot.next_location_id
        )?;
        for property in &snapshot.properties {
            reference
                .resolve_property_type(property.property_type_id)
                .and_then(|_| reference.resolve_location(property.location_id))
                .map_err(|e| {
                    RegistryError::Snapshot(format!("property {}: {}", property.id, e))
                })?;
        }
        let ledger = PropertyLedger::from_parts(snapshot.properties, snapshot.next_property_id)?;
        let roles = RoleStore::from_parts(snapshot.initialized, snapshot.managers);

        Ok(Self { config, roles, reference, ledger })
    }

    /// Write the current state as pretty JSON
    pub fn save_snapshot(&self, path: &Path) -> RegistryResult<()> {
        let snapshot = self.snapshot()?;
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, json)?;
        info!(
            "Saved registry snapshot with {} properties to {}",
            snapshot.properties.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a registry from a JSON snapshot file
    pub fn load_snapshot(path: &Path, config: RegistryConfig) -> RegistryResult<Self> {
        let contents = fs::read_to_string(path)?;
        let snapshot: RegistrySnapshot = serde_json::from_str(&contents)?;
        info!("Loading registry snapshot taken at {}", snapshot.taken_at);
        Self::restore(snapshot, config)
    }
}
