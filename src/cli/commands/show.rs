use anyhow::Result;

use property_registry::{ PropertyRegistry, Registry };

use crate::cli::{ ui, OutputFormat, RecordKind };

/// Print one property, property type, or location
pub fn execute(registry: &Registry, kind: RecordKind, id: u64, format: OutputFormat) -> Result<()> {
    match (kind, format) {
        (RecordKind::Property, OutputFormat::Json) => ui::print_json(&registry.get_property(id)?)?,
        (RecordKind::Property, OutputFormat::Text) => {
            let property = registry.get_property(id)?;
            ui::print_property(&property);
            let availability = if registry.is_available(id) { "yes" } else { "no" };
            ui::print_result("  Accepting tenants", availability);
        }
        (RecordKind::Type, OutputFormat::Json) => ui::print_json(&registry.get_property_type(id)?)?,
        (RecordKind::Type, OutputFormat::Text) => {
            ui::print_property_type(&registry.get_property_type(id)?)
        }
        (RecordKind::Location, OutputFormat::Json) => ui::print_json(&registry.get_location(id)?)?,
        (RecordKind::Location, OutputFormat::Text) => ui::print_location(&registry.get_location(id)?),
    }
    Ok(())
}
