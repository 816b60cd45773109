use std::sync::Arc;
use std::thread;

use crate::errors::RegistryError;
use crate::implementations::registry::Registry;
use crate::models::common::Principal;
use crate::models::outcome::CallResult;
use crate::models::property::{ NewProperty, PropertyStatus };
use crate::traits::property_registry::PropertyRegistry;
use crate::tests::{ apartment, chelsea, manager, outsider, seeded_registry, setup };

#[test]
fn full_listing_lifecycle() {
    setup();
    let registry = Registry::default();
    let a = manager();

    assert!(registry.initialize(&a).is_ok());
    assert!(registry.is_manager(&a).unwrap());

    let type_id = registry.register_property_type(&a, "Apartment", "Multi-family residential unit in a building");
    assert_eq!(type_id, Ok(1));
    assert_eq!(registry.register_location(&a, chelsea()), Ok(1));

    let property_id = registry.register_property(&a, apartment(2)).unwrap();
    assert_eq!(property_id, 1);
    let property = registry.get_property(1).unwrap();
    assert_eq!(property.status, PropertyStatus::Available);
    assert_eq!(property.available_units, 1);
    assert!(registry.is_available(1));

    registry.update_availability(&a, 1, 0, "unavailable").unwrap();
    let property = registry.get_property(1).unwrap();
    assert_eq!(property.available_units, 0);
    assert_eq!(property.status.as_str(), "unavailable");
    assert!(!registry.is_available(1));
}

#[test]
fn rejected_registration_does_not_consume_an_id() {
    setup();
    let registry = Registry::default();
    registry.initialize(&manager()).unwrap();

    let rejected = registry.register_property_type(&outsider(), "Apartment", "");
    assert!(matches!(rejected, Err(RegistryError::Unauthorized(_))));

    assert_eq!(registry.register_property_type(&manager(), "Apartment", ""), Ok(1));
}

#[test]
fn call_results_carry_codes() {
    let registry = seeded_registry();

    let ok: CallResult = registry.register_property(&manager(), apartment(2)).into();
    assert_eq!(ok, CallResult::ok(Some(1)));

    let unauthorized: CallResult = registry.add_manager(&outsider(), &outsider()).into();
    assert!(!unauthorized.success);
    assert_eq!(unauthorized.error, Some(403));

    let not_found: CallResult = registry
        .register_property(&manager(), NewProperty { property_type_id: 9, ..apartment(2) })
        .into();
    assert_eq!(not_found.error, Some(404));

    let invalid: CallResult = registry.update_availability(&manager(), 1, 5, "available").into();
    assert_eq!(invalid.error, Some(400));

    let again: CallResult = registry.initialize(&outsider()).into();
    assert_eq!(again.error, Some(409));
    assert_eq!(again.value, None);

    let updated: CallResult = registry.update_availability(&manager(), 1, 0, "pending").into();
    assert_eq!(updated, CallResult::ok(None));
}

#[test]
fn call_result_serializes_without_empty_fields() {
    let json = serde_json::to_value(CallResult::ok(Some(1))).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true, "value": 1 }));

    let failed = CallResult::from(Err::<u64, _>(RegistryError::NotFound("property 3".into())));
    let json = serde_json::to_value(failed).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert!(json.get("value").is_none());
}

#[test]
fn registry_is_usable_through_a_trait_object() {
    let registry = seeded_registry();
    let dynamic: &dyn PropertyRegistry = &registry;

    let id = dynamic.register_property(&manager(), apartment(3)).unwrap();

    assert_eq!(dynamic.get_property(id).unwrap().bedrooms, 3);
}

#[test]
fn concurrent_registrations_get_distinct_sequential_ids() {
    let registry = Arc::new(seeded_registry());
    let threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let owner = Principal::new(format!("owner-{}", t));
                (0..per_thread)
                    .map(|_| registry.register_property(&owner, apartment(1)).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();

    let expected: Vec<u64> = (1..=(threads * per_thread) as u64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn concurrent_updates_to_one_property_never_tear() {
    let registry = seeded_registry();
    let id = registry.register_property(&manager(), NewProperty { units: 10, ..apartment(2) }).unwrap();

    // Writers alternate between two consistent states; readers must only ever see one of them
    thread::scope(|scope| {
        for w in 0..4 {
            let registry = &registry;
            scope.spawn(move || {
                for i in 0..200 {
                    let (units, status) = if (i + w) % 2 == 0 {
                        (0, "unavailable")
                    } else {
                        (10, "available")
                    };
                    registry.update_availability(&manager(), id, units, status).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let registry = &registry;
            scope.spawn(move || {
                for _ in 0..200 {
                    let property = registry.get_property(id).unwrap();
                    let consistent = matches!(
                        (property.available_units, property.status),
                        (0, PropertyStatus::Unavailable) | (10, PropertyStatus::Available)
                    );
                    assert!(consistent, "torn read: {:?}", property);
                }
            });
        }
    });

    let property = registry.get_property(id).unwrap();
    assert!(property.available_units <= property.units);
}

#[test]
fn concurrent_updates_on_disjoint_properties_all_land() {
    let registry = seeded_registry();
    let owners: Vec<Principal> = (0..6).map(|i| Principal::new(format!("owner-{}", i))).collect();
    let ids: Vec<u64> = owners
        .iter()
        .map(|owner| {
            registry.register_property(owner, NewProperty { units: 5, ..apartment(1) }).unwrap()
        })
        .collect();

    thread::scope(|scope| {
        for (owner, id) in owners.iter().zip(&ids) {
            let registry = &registry;
            scope.spawn(move || {
                for units in (0..=5).rev() {
                    registry.update_availability(owner, *id, units, "pending").unwrap();
                }
            });
        }
    });

    for id in ids {
        let property = registry.get_property(id).unwrap();
        assert_eq!(property.available_units, 0);
        assert_eq!(property.status, PropertyStatus::Pending);
    }
}

#[test]
fn concurrent_initialize_has_exactly_one_winner() {
    setup();
    let registry = Registry::default();

    let winners = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = &registry;
                scope.spawn(move || registry.initialize(&Principal::new(format!("p{}", i))).is_ok())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count()
    });

    assert_eq!(winners, 1);
    assert_eq!(registry.managers().unwrap().len(), 1);
}
