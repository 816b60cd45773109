use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

use crate::models::common::{ LocationId, PropertyTypeId };

/// A category of property, e.g. "Apartment"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyType {
    pub id: PropertyTypeId,
    pub name: String,
    pub description: String,
    /// Reserved for deactivation; always true for now
    pub active: bool,
    pub registered_at: DateTime<Utc>,
}

/// A geographic area properties can be listed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub neighborhood: String,
    /// Reserved for deactivation; always true for now
    pub active: bool,
    pub registered_at: DateTime<Utc>,
}

/// Input for registering a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub neighborhood: String,
}

impl NewLocation {
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        neighborhood: impl Into<String>
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            neighborhood: neighborhood.into(),
        }
    }
}
