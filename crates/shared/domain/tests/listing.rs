use phub_domain::listing::{
    Amenities, FacingDirection, ListingPurpose, PropertyCondition, PropertyType,
};
use serde_json::json;

#[test]
fn purpose_codes_round_trip() {
    for purpose in ListingPurpose::ALL {
        assert_eq!(ListingPurpose::from_code(purpose.code()), Some(purpose));
        let encoded = serde_json::to_value(purpose).expect("serialize purpose");
        assert_eq!(encoded, json!(purpose.code()));
    }
}

#[test]
fn property_type_codes_round_trip() {
    for property_type in PropertyType::ALL {
        assert_eq!(PropertyType::from_code(property_type.code()), Some(property_type));
    }
    assert!(!PropertyType::Land.is_built_structure());
    assert!(PropertyType::House.is_built_structure());
    assert!(PropertyType::Apartment.is_built_structure());
}

#[test]
fn unknown_codes_parse_to_none() {
    assert_eq!(ListingPurpose::from_code(""), None);
    assert_eq!(ListingPurpose::from_code("LEASE"), None);
    assert_eq!(PropertyType::from_code("BUNGALOW"), None);
    // Codes are trimmed but case-sensitive, matching the wire format.
    assert_eq!(ListingPurpose::from_code(" BUY "), Some(ListingPurpose::Buy));
    assert_eq!(ListingPurpose::from_code("buy"), None);
}

#[test]
fn facing_and_condition_use_original_codes() {
    assert_eq!(serde_json::to_value(FacingDirection::Northeast).unwrap(), json!("NE"));
    assert_eq!(serde_json::to_value(PropertyCondition::UsedLess5).unwrap(), json!("USED_LESS_5"));
    let parsed: PropertyCondition = serde_json::from_value(json!("JUST_USED")).unwrap();
    assert_eq!(parsed, PropertyCondition::JustUsed);
}

#[test]
fn amenities_serialize_as_bits() {
    let flags = Amenities::LAUNDRY | Amenities::PUJA_ROOM;
    let encoded = serde_json::to_value(flags).expect("serialize amenities");
    assert_eq!(encoded, json!(5));

    let decoded: Amenities = serde_json::from_value(json!(5)).expect("deserialize amenities");
    assert_eq!(decoded, flags);
    assert!(decoded.contains(Amenities::LAUNDRY));
    assert!(!decoded.contains(Amenities::STORE));
}
