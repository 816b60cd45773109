use crate::config::{ ConfigError, FieldLimits, RegistryConfig };
use crate::implementations::registry::Registry;
use crate::errors::RegistryError;
use crate::traits::property_registry::PropertyRegistry;
use crate::tests::{ manager, setup };

#[test]
fn defaults_apply_when_fields_are_omitted() {
    let config = RegistryConfig::from_yaml("log_level: debug\n").unwrap();

    assert_eq!(config.limits, FieldLimits::default());
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn partial_limits_override_only_named_fields() {
    let config = RegistryConfig::from_yaml("limits:\n  max_name_len: 8\n").unwrap();

    assert_eq!(config.limits.max_name_len, 8);
    assert_eq!(config.limits.max_address_len, FieldLimits::default().max_address_len);
}

#[test]
fn zero_limit_for_required_field_is_invalid() {
    let result = RegistryConfig::from_yaml("limits:\n  max_city_len: 0\n");

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let result = RegistryConfig::from_yaml("limits: [1, 2");

    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn config_file_limits_are_enforced() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.yaml");
    std::fs::write(&path, "limits:\n  max_name_len: 5\n").unwrap();

    let config = RegistryConfig::load(Some(&path)).unwrap();
    let registry = Registry::new(config);
    registry.initialize(&manager()).unwrap();

    let result = registry.register_property_type(&manager(), "Apartment", "");
    assert!(matches!(result, Err(RegistryError::InvalidInput(_))));
    assert_eq!(registry.register_property_type(&manager(), "Loft", ""), Ok(1));
}

#[test]
fn environment_log_level_wins_over_file() {
    let config = RegistryConfig::from_yaml("log_level: warn\n").unwrap();

    assert_eq!(config.log_level_with_override(Some("trace".to_string())).as_deref(), Some("trace"));
    assert_eq!(config.log_level_with_override(None).as_deref(), Some("warn"));
    assert_eq!(config.log_level_with_override(Some("  ".to_string())).as_deref(), Some("warn"));
    assert_eq!(RegistryConfig::default().log_level_with_override(None), None);
}
