use log::{ debug, info, warn };
use std::collections::BTreeSet;
use std::sync::RwLock;

use crate::errors::{ RegistryError, RegistryResult };
use crate::models::common::Principal;

#[derive(Debug, Default)]
struct RoleState {
    initialized: bool,
    managers: BTreeSet<Principal>,
}

/// Tracks which principals hold the property manager role.
///
/// The set only grows. Once `initialize` succeeds it is never empty.
#[derive(Debug, Default)]
pub struct RoleStore {
    state: RwLock<RoleState>,
}

impl RoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted parts
    pub(crate) fn from_parts(initialized: bool, managers: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            state: RwLock::new(RoleState {
                initialized,
                managers: managers.into_iter().collect(),
            }),
        }
    }

    /// Grant the role to the first caller ever to initialize
    pub fn initialize(&self, caller: &Principal) -> RegistryResult<()> {
        let mut state = self.state.write().map_err(|_| RegistryError::Poisoned("role store"))?;
        if state.initialized {
            warn!("Rejected initialize by {}: registry already initialized", caller);
            return Err(RegistryError::AlreadyInitialized);
        }
        state.managers.insert(caller.clone());
        state.initialized = true;
        info!("Registry initialized, {} is the first property manager", caller);
        Ok(())
    }

    /// Add `new_manager` to the role; the grantor must already hold it
    pub fn add_manager(&self, caller: &Principal, new_manager: &Principal) -> RegistryResult<()> {
        let mut state = self.state.write().map_err(|_| RegistryError::Poisoned("role store"))?;
        if !state.managers.contains(caller) {
            warn!("Rejected add_manager by {}: not a property manager", caller);
            return Err(
                RegistryError::Unauthorized(format!("{} is not a property manager", caller))
            );
        }
        if state.managers.insert(new_manager.clone()) {
            info!("{} granted the property manager role to {}", caller, new_manager);
        } else {
            debug!("{} already holds the property manager role", new_manager);
        }
        Ok(())
    }

    pub fn is_manager(&self, principal: &Principal) -> RegistryResult<bool> {
        let state = self.state.read().map_err(|_| RegistryError::Poisoned("role store"))?;
        Ok(state.managers.contains(principal))
    }

    pub fn is_initialized(&self) -> RegistryResult<bool> {
        let state = self.state.read().map_err(|_| RegistryError::Poisoned("role store"))?;
        Ok(state.initialized)
    }

    /// All managers in sorted order
    pub fn managers(&self) -> RegistryResult<Vec<Principal>> {
        let state = self.state.read().map_err(|_| RegistryError::Poisoned("role store"))?;
        Ok(state.managers.iter().cloned().collect())
    }

    /// Initialized flag and managers read under one guard, for snapshots
    pub(crate) fn export(&self) -> RegistryResult<(bool, Vec<Principal>)> {
        let state = self.state.read().map_err(|_| RegistryError::Poisoned("role store"))?;
        Ok((state.initialized, state.managers.iter().cloned().collect()))
    }
}
