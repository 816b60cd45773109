use thiserror::Error;

/// Error types surfaced by the property registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Registry already initialized")]
    AlreadyInitialized,

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Lock poisoned while accessing {0}")]
    Poisoned(&'static str),
}

/// Result type specific to registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Numeric codes handed to external callers
pub const CODE_INVALID_INPUT: u16 = 400;
pub const CODE_UNAUTHORIZED: u16 = 403;
pub const CODE_NOT_FOUND: u16 = 404;
pub const CODE_ALREADY_INITIALIZED: u16 = 409;
pub const CODE_INTERNAL: u16 = 500;

impl RegistryError {
    /// The status code reported in a `CallResult`
    pub fn code(&self) -> u16 {
        match self {
            RegistryError::InvalidInput(_) => CODE_INVALID_INPUT,
            RegistryError::Unauthorized(_) => CODE_UNAUTHORIZED,
            RegistryError::NotFound(_) => CODE_NOT_FOUND,
            RegistryError::AlreadyInitialized => CODE_ALREADY_INITIALIZED,
            RegistryError::Snapshot(_) | RegistryError::Io(_) | RegistryError::Poisoned(_) => {
                CODE_INTERNAL
            }
        }
    }

    /// True for rejections caused by the caller's request rather than the registry itself
    pub fn is_client_error(&self) -> bool {
        self.code() < CODE_INTERNAL
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Snapshot(err.to_string())
    }
}
