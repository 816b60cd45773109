pub mod common;
pub mod reference;
pub mod property;
pub mod search;
pub mod outcome;

// Re-export common model types
pub use common::{ LocationId, Principal, PropertyId, PropertyTypeId };
pub use reference::{ Location, NewLocation, PropertyType };
pub use property::{ NewProperty, Property, PropertyStatus };
pub use search::SearchCriteria;
pub use outcome::CallResult;
