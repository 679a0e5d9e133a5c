use phub_domain::listing::PropertyListing;
use phub_form::audit::hidden_field_violations;
use phub_form::fields::FieldId;
use serde_json::{Value, json};

fn draft(mut extra: Value) -> PropertyListing {
    let mut base = json!({
        "listingPurpose": "SELL",
        "propertyType": "HOUSE",
        "title": "test draft",
    });
    base.as_object_mut()
        .unwrap()
        .append(extra.as_object_mut().expect("extra fixture is an object"));
    serde_json::from_value(base).expect("draft fixture")
}

#[test]
fn consistent_sell_house_draft_passes() {
    let listing = draft(json!({
        "price": 25_000_000.0,
        "priceNegotiable": "NEGOTIABLE",
        "floors": 3,
        "builtYearBs": 2070,
        "furnishing": "SEMI",
    }));
    assert!(hidden_field_violations(&listing).is_empty());
}

#[test]
fn sell_house_draft_with_buy_range_fields_is_flagged() {
    let listing = draft(json!({
        "price": 25_000_000.0,
        "priceMin": 20_000_000.0,
        "floorsMin": 2,
    }));
    let violations = hidden_field_violations(&listing);
    assert_eq!(violations, vec![FieldId::PriceMin, FieldId::FloorsMin]);
}

#[test]
fn land_draft_with_building_fields_is_flagged() {
    let mut listing = draft(json!({
        "propertyType": "LAND",
        "price": 4_500_000.0,
        "landType": "RESIDENTIAL",
        "floors": 2,
        "furnishing": "FULL",
    }));
    listing.amenities = phub_domain::listing::Amenities::LAUNDRY;

    let violations = hidden_field_violations(&listing);
    assert!(violations.contains(&FieldId::Floors));
    assert!(violations.contains(&FieldId::Furnishing));
    assert!(violations.contains(&FieldId::HasLaundry));
    assert!(!violations.contains(&FieldId::LandType));
    assert!(!violations.contains(&FieldId::Price));
}

#[test]
fn rent_apartment_draft_with_rent_terms_passes() {
    let listing = draft(json!({
        "propertyType": "APARTMENT",
        "listingPurpose": "RENT",
        "price": 45_000.0,
        "rentDurationValue": 2,
        "rentDurationUnit": "YEARS",
        "rentPeriod": "MONTHLY",
        "builtYearAd": 2015,
    }));
    assert!(hidden_field_violations(&listing).is_empty());
}

#[test]
fn buy_house_draft_with_built_year_is_flagged() {
    let listing = draft(json!({
        "listingPurpose": "BUY",
        "priceMin": 10_000_000.0,
        "price": 20_000_000.0,
        "builtYearAd": 2015,
    }));
    let violations = hidden_field_violations(&listing);
    assert_eq!(violations, vec![FieldId::BuiltYearAd]);
}
