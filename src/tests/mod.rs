use log::info;

use crate::implementations::registry::Registry;
use crate::models::common::Principal;
use crate::models::property::NewProperty;
use crate::models::reference::NewLocation;
use crate::traits::property_registry::PropertyRegistry;

mod config_tests;
mod query_tests;
mod registry_tests;

pub(crate) const MANAGER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub(crate) const OUTSIDER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

// Initialize logging once for the whole test binary
pub(crate) fn setup() {
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }
}

pub(crate) fn manager() -> Principal {
    Principal::new(MANAGER)
}

pub(crate) fn outsider() -> Principal {
    Principal::new(OUTSIDER)
}

pub(crate) fn chelsea() -> NewLocation {
    NewLocation::new("New York", "NY", "10001", "Chelsea")
}

pub(crate) fn apartment(bedrooms: u32) -> NewProperty {
    NewProperty {
        property_type_id: 1,
        location_id: 1,
        address: "123 Main St, Apt 4B".to_string(),
        units: 1,
        bedrooms,
        bathrooms: 1,
        square_feet: 800,
        monthly_rent: 1500,
        income_restricted: true,
        accessibility_features: false,
    }
}

/// A registry initialized by `MANAGER` with one property type and one location
pub(crate) fn seeded_registry() -> Registry {
    setup();
    let registry = Registry::default();
    let manager = manager();
    registry.initialize(&manager).expect("initialize");
    registry
        .register_property_type(&manager, "Apartment", "Multi-family residential unit in a building")
        .expect("register property type");
    registry.register_location(&manager, chelsea()).expect("register location");
    registry
}
