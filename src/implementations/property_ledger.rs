use chrono::Utc;
use log::{ debug, info };
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{ Arc, RwLock };

use crate::errors::{ RegistryError, RegistryResult };
use crate::models::common::{ Principal, PropertyId };
use crate::models::property::{ NewProperty, Property, PropertyStatus };
use crate::models::search::SearchCriteria;

type Record = Arc<RwLock<Property>>;

#[derive(Debug)]
struct LedgerState {
    properties: BTreeMap<PropertyId, Record>,
    next_id: PropertyId,
}

/// Property records, each behind its own lock.
///
/// Registration takes the map lock; availability updates only lock the record
/// they touch, so updates to different properties never wait on each other.
/// Lock order is always map then record.
#[derive(Debug)]
pub struct PropertyLedger {
    state: RwLock<LedgerState>,
}

impl Default for PropertyLedger {
    fn default() -> Self {
        Self {
            state: RwLock::new(LedgerState { properties: BTreeMap::new(), next_id: 1 }),
        }
    }
}

fn poisoned<T>(_: T) -> RegistryError {
    RegistryError::Poisoned("property ledger")
}

impl PropertyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(properties: Vec<Property>, next_id: PropertyId) -> RegistryResult<Self> {
        let mut map = BTreeMap::new();
        for property in properties {
            if property.id == 0 || property.id >= next_id {
                return Err(
                    RegistryError::Snapshot(
                        format!("property id {} outside 1..{}", property.id, next_id)
                    )
                );
            }
            if property.units == 0 || property.available_units > property.units {
                return Err(
                    RegistryError::Snapshot(
                        format!(
                            "property {} has {} of {} units available",
                            property.id,
                            property.available_units,
                            property.units
                        )
                    )
                );
            }
            let id = property.id;
            if map.insert(id, Arc::new(RwLock::new(property))).is_some() {
                return Err(RegistryError::Snapshot(format!("property id {} appears twice", id)));
            }
        }
        Ok(Self { state: RwLock::new(LedgerState { properties: map, next_id }) })
    }

    /// Store an already validated property owned by `owner`
    pub(crate) fn insert(&self, owner: &Principal, new: NewProperty) -> RegistryResult<PropertyId> {
        let mut state = self.state.write().map_err(poisoned)?;
        let id = state.next_id;
        let now = Utc::now();
        let property = Property {
            id,
            property_type_id: new.property_type_id,
            location_id: new.location_id,
            address: new.address,
            units: new.units,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            square_feet: new.square_feet,
            monthly_rent: new.monthly_rent,
            income_restricted: new.income_restricted,
            accessibility_features: new.accessibility_features,
            available_units: new.units,
            status: PropertyStatus::Available,
            owner: owner.clone(),
            registered_at: now,
            updated_at: now,
        };
        state.properties.insert(id, Arc::new(RwLock::new(property)));
        state.next_id += 1;
        info!("Registered property {} owned by {}", id, owner);
        Ok(id)
    }

    fn record(&self, id: PropertyId) -> RegistryResult<Record> {
        let state = self.state.read().map_err(poisoned)?;
        state.properties
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("property {}", id)))
    }

    pub fn get(&self, id: PropertyId) -> RegistryResult<Property> {
        debug!("Looking up property {}", id);
        let record = self.record(id)?;
        let property = record.read().map_err(poisoned)?;
        Ok(property.clone())
    }

    /// Apply an availability change under the record's write lock.
    ///
    /// `check` sees the current record and returns the new free units and status,
    /// or an error, in which case nothing is written.
    pub(crate) fn update_availability<F>(&self, id: PropertyId, check: F) -> RegistryResult<Property>
        where F: FnOnce(&Property) -> RegistryResult<(u32, PropertyStatus)>
    {
        let record = self.record(id)?;
        let mut property = record.write().map_err(poisoned)?;
        let (available_units, status) = check(&property)?;
        property.available_units = available_units;
        property.status = status;
        property.updated_at = Utc::now();
        info!(
            "Property {} now has {} of {} units available, status {}",
            id,
            available_units,
            property.units,
            status
        );
        Ok(property.clone())
    }

    /// First property with id greater than `after` that matches `criteria`
    pub(crate) fn next_match(
        &self,
        after: Option<PropertyId>,
        criteria: &SearchCriteria
    ) -> RegistryResult<Option<Property>> {
        let lower = match after {
            Some(id) => Bound::Excluded(id),
            None => Bound::Unbounded,
        };
        let state = self.state.read().map_err(poisoned)?;
        for record in state.properties.range((lower, Bound::Unbounded)).map(|(_, r)| r) {
            let property = record.read().map_err(poisoned)?;
            if criteria.matches(&property) {
                return Ok(Some(property.clone()));
            }
        }
        Ok(None)
    }

    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.state.read().map_err(poisoned)?.properties.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// All properties with the counter, for snapshots
    pub(crate) fn export(&self) -> RegistryResult<(Vec<Property>, PropertyId)> {
        let state = self.state.read().map_err(poisoned)?;
        let mut properties = Vec::with_capacity(state.properties.len());
        for record in state.properties.values() {
            properties.push(record.read().map_err(poisoned)?.clone());
        }
        Ok((properties, state.next_id))
    }
}
