use serde::{ Deserialize, Serialize };
use std::fmt;

/// Identifier of a registered property type
pub type PropertyTypeId = u64;

/// Identifier of a registered location
pub type LocationId = u64;

/// Identifier of a registered property
pub type PropertyId = u64;

/// An external identity that initiates operations.
///
/// The registry trusts the identity supplied by its caller (a session, a
/// transaction signer); it never authenticates principals itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}
