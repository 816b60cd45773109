use anyhow::{ Context, Result };
use std::path::Path;

use property_registry::{ Property, PropertyRegistry, Registry, SearchCriteria };

use crate::cli::{ ui, OutputFormat };

/// Print every property in the snapshot that matches `criteria`
pub fn execute(registry: &Registry, criteria: SearchCriteria, format: OutputFormat) -> Result<()> {
    let matches: Vec<Property> = registry.search_properties(criteria).collect();

    match format {
        OutputFormat::Json => ui::print_json(&matches)?,
        OutputFormat::Text => {
            ui::print_header("Matching Properties");
            if matches.is_empty() {
                ui::print_info("No properties match the given filters.");
            }
            for property in &matches {
                ui::print_property(property);
                println!();
            }
            ui::print_result("Matches", &matches.len().to_string());
        }
    }

    Ok(())
}

/// Load the snapshot a read-only command works on
pub fn open_state(path: &Path, config: property_registry::RegistryConfig) -> Result<Registry> {
    Registry::load_snapshot(path, config).with_context(||
        format!("Failed to load state {}", path.display())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use property_registry::{ RegistryConfig, RegistryError };

    #[test]
    fn missing_state_keeps_the_load_error_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = open_state(&path, RegistryConfig::default()).unwrap_err();

        assert!(err.to_string().starts_with("Failed to load state"));
        assert!(matches!(err.downcast_ref::<RegistryError>(), Some(RegistryError::Io(_))));
    }
}
