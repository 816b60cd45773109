use log::debug;
use serde::{ Deserialize, Serialize };
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::{ RegistryError, RegistryResult };
use crate::models::common::{ Principal, PropertyId };
use crate::models::outcome::CallResult;
use crate::models::property::NewProperty;
use crate::models::reference::NewLocation;
use crate::traits::property_registry::PropertyRegistry;

/// One mutating call replayed against a registry, as written in a YAML script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Initialize {
        caller: Principal,
    },
    AddManager {
        caller: Principal,
        principal: Principal,
    },
    RegisterPropertyType {
        caller: Principal,
        name: String,
        #[serde(default)]
        description: String,
    },
    RegisterLocation {
        caller: Principal,
        location: NewLocation,
    },
    RegisterProperty {
        caller: Principal,
        property: NewProperty,
    },
    UpdateAvailability {
        caller: Principal,
        property_id: PropertyId,
        available_units: u32,
        status: String,
    },
}

impl Operation {
    pub fn caller(&self) -> &Principal {
        match self {
            Operation::Initialize { caller } |
            Operation::AddManager { caller, .. } |
            Operation::RegisterPropertyType { caller, .. } |
            Operation::RegisterLocation { caller, .. } |
            Operation::RegisterProperty { caller, .. } |
            Operation::UpdateAvailability { caller, .. } => caller,
        }
    }

    /// Run the operation and wrap its outcome for the caller
    pub fn apply<R: PropertyRegistry + ?Sized>(&self, registry: &R) -> CallResult {
        debug!("Applying {}", self);
        match self {
            Operation::Initialize { caller } => registry.initialize(caller).into(),
            Operation::AddManager { caller, principal } => {
                registry.add_manager(caller, principal).into()
            }
            Operation::RegisterPropertyType { caller, name, description } => {
                registry.register_property_type(caller, name, description).into()
            }
            Operation::RegisterLocation { caller, location } => {
                registry.register_location(caller, location.clone()).into()
            }
            Operation::RegisterProperty { caller, property } => {
                registry.register_property(caller, property.clone()).into()
            }
            Operation::UpdateAvailability { caller, property_id, available_units, status } => {
                registry.update_availability(caller, *property_id, *available_units, status).into()
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Initialize { caller } => write!(f, "initialize by {}", caller),
            Operation::AddManager { caller, principal } => {
                write!(f, "add_manager {} by {}", principal, caller)
            }
            Operation::RegisterPropertyType { caller, name, .. } => {
                write!(f, "register_property_type '{}' by {}", name, caller)
            }
            Operation::RegisterLocation { caller, location } => {
                write!(f, "register_location {}, {} by {}", location.city, location.state, caller)
            }
            Operation::RegisterProperty { caller, property } => {
                write!(f, "register_property '{}' by {}", property.address, caller)
            }
            Operation::UpdateAvailability { caller, property_id, available_units, status } => {
                write!(
                    f,
                    "update_availability {} to {} units, {} by {}",
                    property_id,
                    available_units,
                    status,
                    caller
                )
            }
        }
    }
}

/// Parse a YAML list of operations
pub fn parse_script(contents: &str) -> RegistryResult<Vec<Operation>> {
    serde_yaml::from_str(contents)
        .map_err(|e| RegistryError::InvalidInput(format!("invalid script: {}", e)))
}

/// Read and parse a YAML script file
pub fn load_script(path: &Path) -> RegistryResult<Vec<Operation>> {
    let contents = fs::read_to_string(path)?;
    parse_script(&contents)
}

/// Apply every operation in order; failures do not stop the run
pub fn run_script<R: PropertyRegistry + ?Sized>(
    registry: &R,
    operations: &[Operation]
) -> Vec<CallResult> {
    operations
        .iter()
        .map(|operation| operation.apply(registry))
        .collect()
}
