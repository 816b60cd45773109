use serde::{ Deserialize, Serialize };
use std::fmt;

use crate::errors::RegistryResult;

/// Result envelope handed to external callers of mutating operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<u16>,
    /// Human-readable reason for a failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CallResult {
    pub fn ok(value: Option<u64>) -> Self {
        Self { success: true, value, error: None, message: None }
    }
}

impl From<RegistryResult<u64>> for CallResult {
    fn from(result: RegistryResult<u64>) -> Self {
        match result {
            Ok(id) => CallResult::ok(Some(id)),
            Err(e) => CallResult {
                success: false,
                value: None,
                error: Some(e.code()),
                message: Some(e.to_string()),
            },
        }
    }
}

impl From<RegistryResult<()>> for CallResult {
    fn from(result: RegistryResult<()>) -> Self {
        match result {
            Ok(()) => CallResult::ok(None),
            Err(e) => CallResult::from(Err::<u64, _>(e)),
        }
    }
}

impl fmt::Display for CallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.success, self.value, self.error) {
            (true, Some(value), _) => write!(f, "ok ({})", value),
            (true, None, _) => write!(f, "ok"),
            (false, _, Some(code)) => {
                write!(f, "error {}", code)?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
            (false, _, None) => write!(f, "error"),
        }
    }
}
