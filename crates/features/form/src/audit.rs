//! Consistency check between a listing and the form rules.
//!
//! The admin form only lets users fill fields its rules show. Listings that
//! arrive through the API skip the form, so the same policy is re-applied
//! here: a draft must not carry values in fields the rules hide for its
//! (purpose, property type) pair.

use crate::fields::{ControllerState, FieldId};
use crate::rules::compute_visibility;
use phub_domain::listing::{Amenities, PropertyListing};
use strum::IntoEnumIterator;

/// Fields of the listing that hold values although the form hides them for
/// the listing's controller pair. Empty means the listing is consistent.
#[must_use]
pub fn hidden_field_violations(listing: &PropertyListing) -> Vec<FieldId> {
    let state = ControllerState::new(Some(listing.listing_purpose), Some(listing.property_type));
    let map = compute_visibility(state);

    FieldId::iter()
        .filter(|field| !map.is_visible(*field) && field_has_value(listing, *field))
        .collect()
}

/// Whether the listing carries a value for the given form field.
///
/// Amenity rows are checkboxes: "has a value" means the flag is set.
fn field_has_value(listing: &PropertyListing, field: FieldId) -> bool {
    match field {
        FieldId::PriceMin => listing.price_min.is_some(),
        FieldId::Price => listing.price.is_some(),
        FieldId::PriceNegotiable => listing.price_negotiable.is_some(),
        FieldId::RoadSizeMinFt => listing.road_size_min_ft.is_some(),
        FieldId::RoadSizeFt => listing.road_size_ft.is_some(),
        FieldId::FloorsMin => listing.floors_min.is_some(),
        FieldId::Floors => listing.floors.is_some(),
        FieldId::MasterBedroomsMin => listing.master_bedrooms_min.is_some(),
        FieldId::MasterBedrooms => listing.master_bedrooms.is_some(),
        FieldId::CommonBedroomsMin => listing.common_bedrooms_min.is_some(),
        FieldId::CommonBedrooms => listing.common_bedrooms.is_some(),
        FieldId::CommonBathroomsMin => listing.common_bathrooms_min.is_some(),
        FieldId::CommonBathrooms => listing.common_bathrooms.is_some(),
        FieldId::LivingRoomsMin => listing.living_rooms_min.is_some(),
        FieldId::LivingRooms => listing.living_rooms.is_some(),
        FieldId::KitchensMin => listing.kitchens_min.is_some(),
        FieldId::Kitchens => listing.kitchens.is_some(),
        FieldId::ParkingCarMin => listing.parking_car_min.is_some(),
        FieldId::ParkingCar => listing.parking_car.is_some(),
        FieldId::ParkingBikeMin => listing.parking_bike_min.is_some(),
        FieldId::ParkingBike => listing.parking_bike.is_some(),
        FieldId::PropertyCondition => listing.property_condition.is_some(),
        FieldId::BuiltYearBs => listing.built_year_bs.is_some(),
        FieldId::BuiltYearAd => listing.built_year_ad.is_some(),
        FieldId::HasLaundry => listing.amenities.contains(Amenities::LAUNDRY),
        FieldId::HasStore => listing.amenities.contains(Amenities::STORE),
        FieldId::HasPujaRoom => listing.amenities.contains(Amenities::PUJA_ROOM),
        FieldId::Furnishing => listing.furnishing.is_some(),
        FieldId::LandType => listing.land_type.is_some(),
        FieldId::RentDurationValue => listing.rent_duration_value.is_some(),
        FieldId::RentDurationUnit => listing.rent_duration_unit.is_some(),
        FieldId::RentPeriod => listing.rent_period.is_some(),
    }
}
