use phub_domain::listing::{ListingPurpose, PropertyType};
use phub_form::fields::{
    ControllerState, FieldId, LAND_ONLY_FIELDS, MAX_OR_SINGLE_FIELDS, MIN_RANGE_FIELDS,
    RENT_ONLY_FIELDS, STRUCTURE_FIELDS,
};
use phub_form::rules::compute_visibility;

fn pair(purpose: ListingPurpose, property_type: PropertyType) -> ControllerState {
    ControllerState::new(Some(purpose), Some(property_type))
}

#[test]
fn blank_controllers_hide_every_field() {
    let map = compute_visibility(ControllerState::from_codes("", ""));
    assert_eq!(map.visible_fields().count(), 0);

    let map = compute_visibility(ControllerState::from_codes("BUY", ""));
    assert_eq!(map.visible_fields().count(), 0);

    let map = compute_visibility(ControllerState::from_codes("", "HOUSE"));
    assert_eq!(map.visible_fields().count(), 0);
}

#[test]
fn unknown_codes_behave_like_blank_ones() {
    let map = compute_visibility(ControllerState::from_codes("LEASE", "HOUSE"));
    assert_eq!(map.visible_fields().count(), 0);

    let map = compute_visibility(ControllerState::from_codes("BUY", "CASTLE"));
    assert_eq!(map.visible_fields().count(), 0);
}

#[test]
fn buy_house_shows_ranges_and_structure_fields() {
    let map = compute_visibility(pair(ListingPurpose::Buy, PropertyType::House));

    for field in MIN_RANGE_FIELDS {
        assert!(map.is_visible(*field), "{field:?} should be visible for BUY + HOUSE");
    }
    for field in MAX_OR_SINGLE_FIELDS {
        assert!(map.is_visible(*field), "{field:?} should be visible for BUY + HOUSE");
    }
    for field in STRUCTURE_FIELDS {
        assert!(map.is_visible(*field), "{field:?} should be visible for BUY + HOUSE");
    }
    for field in RENT_ONLY_FIELDS {
        assert!(!map.is_visible(*field), "{field:?} must stay hidden for BUY + HOUSE");
    }
    for field in LAND_ONLY_FIELDS {
        assert!(!map.is_visible(*field), "{field:?} must stay hidden for BUY + HOUSE");
    }
}

#[test]
fn sell_apartment_shows_single_values_and_built_years() {
    let map = compute_visibility(pair(ListingPurpose::Sell, PropertyType::Apartment));

    assert!(map.is_visible(FieldId::Price));
    assert!(map.is_visible(FieldId::PriceNegotiable));
    assert!(map.is_visible(FieldId::BuiltYearBs));
    assert!(map.is_visible(FieldId::BuiltYearAd));
    assert!(!map.is_visible(FieldId::PriceMin));
    assert!(!map.is_visible(FieldId::RentPeriod));
    assert!(!map.is_visible(FieldId::LandType));
}

#[test]
fn rent_house_shows_rent_terms() {
    let map = compute_visibility(pair(ListingPurpose::Rent, PropertyType::House));

    for field in RENT_ONLY_FIELDS {
        assert!(map.is_visible(*field), "{field:?} should be visible for RENT + HOUSE");
    }
    assert!(!map.is_visible(FieldId::PriceNegotiable));
    assert!(!map.is_visible(FieldId::PriceMin));
}

#[test]
fn land_never_shows_building_fields() {
    for purpose in ListingPurpose::ALL {
        let map = compute_visibility(pair(purpose, PropertyType::Land));
        assert!(!map.is_visible(FieldId::MasterBedrooms));
        assert!(!map.is_visible(FieldId::CommonBathroomsMin));
        assert!(!map.is_visible(FieldId::ParkingCar));
        assert!(!map.is_visible(FieldId::Furnishing));
        assert!(!map.is_visible(FieldId::PropertyCondition));
        assert!(map.is_visible(FieldId::LandType));
    }
}

#[test]
fn recompute_is_idempotent() {
    for purpose in ListingPurpose::ALL {
        for property_type in PropertyType::ALL {
            let state = pair(purpose, property_type);
            assert_eq!(compute_visibility(state), compute_visibility(state));
        }
    }
}

#[test]
fn visibility_map_serializes_with_field_names() {
    let map = compute_visibility(pair(ListingPurpose::Sell, PropertyType::Land));
    let encoded = serde_json::to_value(&map).expect("serialize map");

    assert_eq!(encoded["land_type"], serde_json::json!(true));
    assert_eq!(encoded["price"], serde_json::json!(true));
    assert_eq!(encoded["floors"], serde_json::json!(false));
}
