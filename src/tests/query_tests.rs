use crate::models::property::{ NewProperty, PropertyStatus };
use crate::models::search::SearchCriteria;
use crate::traits::property_registry::PropertyRegistry;
use crate::tests::{ apartment, manager, outsider, seeded_registry };
use crate::implementations::registry::Registry;

fn listing(address: &str, bedrooms: u32, bathrooms: u32, rent: u64) -> NewProperty {
    NewProperty {
        address: address.to_string(),
        bedrooms,
        bathrooms,
        monthly_rent: rent,
        ..apartment(bedrooms)
    }
}

/// Three listings with bedrooms [2, 3, 2]
fn three_listings() -> Registry {
    let registry = seeded_registry();
    registry.register_property(&manager(), listing("123 Main St, Apt 4B", 2, 1, 1500)).unwrap();
    registry.register_property(&manager(), listing("456 Elm St", 3, 2, 2400)).unwrap();
    registry.register_property(&outsider(), listing("789 Oak Ave, Unit 2", 2, 2, 1800)).unwrap();
    registry
}

fn ids(search: impl Iterator<Item = crate::models::property::Property>) -> Vec<u64> {
    search.map(|p| p.id).collect()
}

#[test]
fn search_by_bedrooms_returns_matches_in_id_order() {
    let registry = three_listings();

    let results: Vec<_> = registry.search_properties(SearchCriteria::new().bedrooms(2)).collect();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, 1);
    assert_eq!(results[1].id, 3);
    assert!(results.iter().all(|p| p.bedrooms == 2));
    assert_eq!(results[1].address, "789 Oak Ave, Unit 2");
}

#[test]
fn empty_criteria_returns_everything() {
    let registry = three_listings();

    assert!(SearchCriteria::new().is_empty());
    assert_eq!(ids(registry.search_properties(SearchCriteria::new())), vec![1, 2, 3]);
}

#[test]
fn search_over_empty_ledger_yields_nothing() {
    let registry = seeded_registry();

    assert_eq!(registry.search_properties(SearchCriteria::new()).count(), 0);
}

#[test]
fn range_filters_are_inclusive() {
    let registry = three_listings();

    let criteria = SearchCriteria::new().rent_between(Some(1500), Some(1800));
    assert_eq!(ids(registry.search_properties(criteria)), vec![1, 3]);

    let criteria = SearchCriteria::new().bathrooms_between(Some(2), None);
    assert_eq!(ids(registry.search_properties(criteria)), vec![2, 3]);

    let criteria = SearchCriteria::new().bedrooms_between(None, Some(2));
    assert_eq!(ids(registry.search_properties(criteria)), vec![1, 3]);
}

#[test]
fn filters_combine() {
    let registry = three_listings();

    let criteria = SearchCriteria::new().bedrooms(2).owner(outsider());
    assert_eq!(ids(registry.search_properties(criteria)), vec![3]);

    let criteria = SearchCriteria::new().property_type(1).location(1).income_restricted(false);
    assert!(ids(registry.search_properties(criteria)).is_empty());

    let criteria = SearchCriteria::new().accessibility_features(false).location(2);
    assert!(ids(registry.search_properties(criteria)).is_empty());
}

#[test]
fn status_filter_tracks_updates() {
    let registry = three_listings();
    registry.update_availability(&manager(), 2, 0, "unavailable").unwrap();

    let available = SearchCriteria::new().status(PropertyStatus::Available);
    assert_eq!(ids(registry.search_properties(available)), vec![1, 3]);

    let unavailable = SearchCriteria::new().status(PropertyStatus::Unavailable);
    assert_eq!(ids(registry.search_properties(unavailable)), vec![2]);
}

#[test]
fn search_is_lazy_and_restartable() {
    let registry = three_listings();
    let mut search = registry.search_properties(SearchCriteria::new());

    assert_eq!(search.next().map(|p| p.id), Some(1));

    // Properties registered mid-iteration are picked up past the cursor
    registry.register_property(&manager(), listing("1 New Rd", 1, 1, 900)).unwrap();
    assert_eq!(ids(search.by_ref()), vec![2, 3, 4]);
    assert!(search.next().is_none());

    search.restart();
    assert_eq!(ids(search.clone()), vec![1, 2, 3, 4]);
    assert_eq!(ids(search), vec![1, 2, 3, 4]);
}

#[test]
fn search_results_reflect_committed_updates() {
    let registry = three_listings();
    let mut search = registry.search_properties(SearchCriteria::new().bedrooms(2));

    assert_eq!(search.next().map(|p| p.id), Some(1));
    registry.update_availability(&outsider(), 3, 0, "maintenance").unwrap();

    let third = search.next().unwrap();
    assert_eq!(third.id, 3);
    assert_eq!(third.status, PropertyStatus::Maintenance);
    assert_eq!(third.available_units, 0);
}
