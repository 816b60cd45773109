use colored::*;
use serde::Serialize;

use property_registry::{ CallResult, Location, Property, PropertyStatus, PropertyType };

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print any serialisable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the outcome of one scripted call with color
pub fn print_call_result(index: usize, operation: &str, result: &CallResult) {
    let outcome = if result.success {
        format!("✓ {}", result).green().bold()
    } else {
        format!("✗ {}", result).red().bold()
    };
    println!("{:>3}. {} → {}", index + 1, operation, outcome);
}

fn status_label(status: PropertyStatus) -> ColoredString {
    match status {
        PropertyStatus::Available => status.as_str().green(),
        PropertyStatus::Unavailable => status.as_str().red(),
        PropertyStatus::Pending | PropertyStatus::Maintenance => status.as_str().yellow(),
    }
}

/// Print a property as an aligned block
pub fn print_property(property: &Property) {
    println!("{} {}", format!("#{}", property.id).bold(), property.address.bold());
    print_result("  Type", &property.property_type_id.to_string());
    print_result("  Location", &property.location_id.to_string());
    print_result(
        "  Layout",
        &format!(
            "{} bd / {} ba, {} sq ft",
            property.bedrooms,
            property.bathrooms,
            property.square_feet
        )
    );
    print_result("  Rent", &property.monthly_rent.to_string());
    print_result("  Units", &format!("{} of {} available", property.available_units, property.units));
    println!("{}: {}", "  Status".bold(), status_label(property.status));
    print_result("  Income restricted", &property.income_restricted.to_string());
    print_result("  Accessibility features", &property.accessibility_features.to_string());
    print_result("  Owner", property.owner.as_str());
}

pub fn print_property_type(property_type: &PropertyType) {
    println!("{} {}", format!("#{}", property_type.id).bold(), property_type.name.bold());
    print_result("  Description", &property_type.description);
    print_result("  Active", &property_type.active.to_string());
}

pub fn print_location(location: &Location) {
    println!(
        "{} {}",
        format!("#{}", location.id).bold(),
        format!("{}, {} {}", location.city, location.state, location.zip_code).bold()
    );
    print_result("  Neighborhood", &location.neighborhood);
    print_result("  Active", &location.active.to_string());
}
