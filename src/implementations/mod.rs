pub mod access_gate;
pub mod property_ledger;
pub mod query;
pub mod reference_store;
pub mod registry;
pub mod role_store;
pub mod script;
pub mod snapshot;
pub mod validation;
