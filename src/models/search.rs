use serde::{ Deserialize, Serialize };

use crate::models::common::{ LocationId, Principal, PropertyTypeId };
use crate::models::property::{ Property, PropertyStatus };

/// Optional filters for property search.
///
/// Every filter that is set must match; an empty criteria matches every property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub property_type_id: Option<PropertyTypeId>,
    pub location_id: Option<LocationId>,
    pub min_bedrooms: Option<u32>,
    pub max_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub max_bathrooms: Option<u32>,
    pub min_rent: Option<u64>,
    pub max_rent: Option<u64>,
    pub income_restricted: Option<bool>,
    pub accessibility_features: Option<bool>,
    pub status: Option<PropertyStatus>,
    pub owner: Option<Principal>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_type(mut self, id: PropertyTypeId) -> Self {
        self.property_type_id = Some(id);
        self
    }

    pub fn location(mut self, id: LocationId) -> Self {
        self.location_id = Some(id);
        self
    }

    /// Exactly `count` bedrooms
    pub fn bedrooms(mut self, count: u32) -> Self {
        self.min_bedrooms = Some(count);
        self.max_bedrooms = Some(count);
        self
    }

    pub fn bedrooms_between(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_bedrooms = min;
        self.max_bedrooms = max;
        self
    }

    /// Exactly `count` bathrooms
    pub fn bathrooms(mut self, count: u32) -> Self {
        self.min_bathrooms = Some(count);
        self.max_bathrooms = Some(count);
        self
    }

    pub fn bathrooms_between(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_bathrooms = min;
        self.max_bathrooms = max;
        self
    }

    pub fn rent_between(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_rent = min;
        self.max_rent = max;
        self
    }

    pub fn income_restricted(mut self, value: bool) -> Self {
        self.income_restricted = Some(value);
        self
    }

    pub fn accessibility_features(mut self, value: bool) -> Self {
        self.accessibility_features = Some(value);
        self
    }

    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn owner(mut self, owner: impl Into<Principal>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether a property satisfies every filter that is set
    pub fn matches(&self, property: &Property) -> bool {
        fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
            min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
        }
        fn equals<T: PartialEq>(value: &T, wanted: &Option<T>) -> bool {
            wanted.as_ref().map_or(true, |wanted| wanted == value)
        }

        equals(&property.property_type_id, &self.property_type_id) &&
            equals(&property.location_id, &self.location_id) &&
            within(property.bedrooms, self.min_bedrooms, self.max_bedrooms) &&
            within(property.bathrooms, self.min_bathrooms, self.max_bathrooms) &&
            within(property.monthly_rent, self.min_rent, self.max_rent) &&
            equals(&property.income_restricted, &self.income_restricted) &&
            equals(&property.accessibility_features, &self.accessibility_features) &&
            equals(&property.status, &self.status) &&
            equals(&property.owner, &self.owner)
    }
}
