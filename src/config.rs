use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

/// Environment variable naming a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "REGISTRY_CONFIG";

/// Environment variable overriding the log level
pub const LOG_LEVEL_ENV: &str = "REGISTRY_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for the property registry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    /// Maximum lengths for the free-text fields of registered records
    #[serde(default)]
    pub limits: FieldLimits,

    /// Default log level used by the binary when none is given on the command line
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Upper bounds on string field lengths, in bytes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FieldLimits {
    pub max_name_len: usize,
    pub max_description_len: usize,
    pub max_city_len: usize,
    pub max_state_len: usize,
    pub max_zip_len: usize,
    pub max_neighborhood_len: usize,
    pub max_address_len: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_name_len: 50,
            max_description_len: 200,
            max_city_len: 50,
            max_state_len: 50,
            max_zip_len: 10,
            max_neighborhood_len: 50,
            max_address_len: 100,
        }
    }
}

impl FieldLimits {
    fn check(&self) -> Result<(), ConfigError> {
        let limits = [
            ("max_name_len", self.max_name_len),
            ("max_city_len", self.max_city_len),
            ("max_state_len", self.max_state_len),
            ("max_zip_len", self.max_zip_len),
            ("max_neighborhood_len", self.max_neighborhood_len),
            ("max_address_len", self.max_address_len),
        ];
        // Required fields must be able to hold at least one byte
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be greater than zero", name)));
            }
        }
        Ok(())
    }
}

impl RegistryConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = serde_yaml::from_str(contents)?;
        config.limits.check()?;
        Ok(config)
    }

    /// Resolve the configuration: an explicit path wins, then `REGISTRY_CONFIG`, then defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        use log::{ debug, info };

        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from),
        };

        match path {
            Some(path) => {
                info!("Loading registry configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Log level from the config file, overridden by `REGISTRY_LOG_LEVEL`
    pub fn effective_log_level(&self) -> Option<String> {
        self.log_level_with_override(std::env::var(LOG_LEVEL_ENV).ok())
    }

    /// A non-blank override wins over the configured level
    pub fn log_level_with_override(&self, override_level: Option<String>) -> Option<String> {
        override_level
            .filter(|level| !level.trim().is_empty())
            .or_else(|| self.log_level.clone())
    }
}
