use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use std::{ fmt, str::FromStr };

use crate::errors::RegistryError;
use crate::models::common::{ LocationId, Principal, PropertyId, PropertyTypeId };

/// A rental property listed in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub property_type_id: PropertyTypeId,
    pub location_id: LocationId,
    pub address: String,
    pub units: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    /// Monthly rent in currency minor units
    pub monthly_rent: u64,
    pub income_restricted: bool,
    pub accessibility_features: bool,
    /// Always within `0..=units`
    pub available_units: u32,
    pub status: PropertyStatus,
    /// Set to the registering caller and never reassigned
    pub owner: Principal,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Listed as available with at least one free unit
    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available && self.available_units > 0
    }
}

/// Input for registering a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub property_type_id: PropertyTypeId,
    pub location_id: LocationId,
    pub address: String,
    pub units: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    pub monthly_rent: u64,
    #[serde(default)]
    pub income_restricted: bool,
    #[serde(default)]
    pub accessibility_features: bool,
}

/// Listing state of a property.
///
/// The set is closed; any other name is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available, // Open for new tenants
    Unavailable, // Fully occupied or withdrawn
    Pending, // Listing under review or a lease is being finalised
    Maintenance, // Temporarily off the market for repairs
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 4] = [
        PropertyStatus::Available,
        PropertyStatus::Unavailable,
        PropertyStatus::Pending,
        PropertyStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Unavailable => "unavailable",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyStatus::ALL.iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| RegistryError::InvalidInput(format!("unrecognized status '{}'", s)))
    }
}
