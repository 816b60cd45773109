use log::warn;

use crate::errors::{ RegistryError, RegistryResult };
use crate::implementations::role_store::RoleStore;
use crate::models::common::Principal;
use crate::models::property::Property;

/// Authorization checks applied in front of every mutating operation
pub struct AccessGate<'a> {
    roles: &'a RoleStore,
}

impl<'a> AccessGate<'a> {
    pub fn new(roles: &'a RoleStore) -> Self {
        Self { roles }
    }

    /// Require the caller to hold the property manager role
    pub fn require_manager(&self, caller: &Principal, action: &str) -> RegistryResult<()> {
        if self.roles.is_manager(caller)? {
            return Ok(());
        }
        warn!("Rejected {} by {}: not a property manager", action, caller);
        Err(RegistryError::Unauthorized(format!("{} requires the property manager role", action)))
    }

    /// Require the caller to own the property
    pub fn require_owner(&self, caller: &Principal, property: &Property) -> RegistryResult<()> {
        if &property.owner == caller {
            return Ok(());
        }
        warn!("Rejected update of property {} by {}: not the owner", property.id, caller);
        Err(
            RegistryError::Unauthorized(
                format!("only the owner may update property {}", property.id)
            )
        )
    }
}
