//! Input checks run before any mutation is committed.
//!
//! Every function here is pure: it either returns the normalised value to store
//! or an `InvalidInput` error, and never touches registry state.

use log::warn;

use crate::config::FieldLimits;
use crate::errors::{ RegistryError, RegistryResult };
use crate::models::property::{ NewProperty, Property, PropertyStatus };
use crate::models::reference::NewLocation;

fn invalid(message: String) -> RegistryError {
    warn!("Validation failed: {}", message);
    RegistryError::InvalidInput(message)
}

/// Non-empty text no longer than `max` bytes
fn required_text(field: &str, value: &str, max: usize) -> RegistryResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{} must not be empty", field)));
    }
    bounded_text(field, value, max)
}

fn bounded_text(field: &str, value: &str, max: usize) -> RegistryResult<()> {
    if value.len() > max {
        return Err(invalid(format!("{} exceeds {} bytes", field, max)));
    }
    Ok(())
}

pub fn validate_property_type(
    name: &str,
    description: &str,
    limits: &FieldLimits
) -> RegistryResult<()> {
    required_text("name", name, limits.max_name_len)?;
    bounded_text("description", description, limits.max_description_len)
}

pub fn validate_location(location: &NewLocation, limits: &FieldLimits) -> RegistryResult<()> {
    required_text("city", &location.city, limits.max_city_len)?;
    required_text("state", &location.state, limits.max_state_len)?;
    required_text("zip_code", &location.zip_code, limits.max_zip_len)?;
    required_text("neighborhood", &location.neighborhood, limits.max_neighborhood_len)
}

/// Field checks for a new property; reference resolution happens separately
pub fn validate_new_property(property: &NewProperty, limits: &FieldLimits) -> RegistryResult<()> {
    required_text("address", &property.address, limits.max_address_len)?;
    if property.units == 0 {
        return Err(invalid("units must be at least 1".to_string()));
    }
    if property.square_feet == 0 {
        return Err(invalid("square_feet must be at least 1".to_string()));
    }
    Ok(())
}

/// Check an availability update against the current record and parse its status
pub fn validate_availability(
    property: &Property,
    available_units: u32,
    status: &str
) -> RegistryResult<PropertyStatus> {
    if available_units > property.units {
        return Err(
            invalid(
                format!(
                    "available_units {} exceeds the {} units of property {}",
                    available_units,
                    property.units,
                    property.id
                )
            )
        );
    }
    status.parse::<PropertyStatus>().map_err(|e| {
        warn!("Validation failed: {}", e);
        e
    })
}
