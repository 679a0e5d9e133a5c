//! Field vocabulary of the listing admin form.
//!
//! Every row the visibility engine controls is named here, together with the
//! named groups the rules operate on. Group membership mirrors the admin
//! form layout: `*_min` fields are the lower bounds of BUY ranges, their
//! unsuffixed twins hold the single SELL/RENT value or the upper bound.

use phub_domain::listing::{ListingPurpose, PropertyType};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifier of a single controlled form row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldId {
    PriceMin,
    Price,
    PriceNegotiable,
    RoadSizeMinFt,
    RoadSizeFt,
    FloorsMin,
    Floors,
    MasterBedroomsMin,
    MasterBedrooms,
    CommonBedroomsMin,
    CommonBedrooms,
    CommonBathroomsMin,
    CommonBathrooms,
    LivingRoomsMin,
    LivingRooms,
    KitchensMin,
    Kitchens,
    ParkingCarMin,
    ParkingCar,
    ParkingBikeMin,
    ParkingBike,
    PropertyCondition,
    BuiltYearBs,
    BuiltYearAd,
    HasLaundry,
    HasStore,
    HasPujaRoom,
    Furnishing,
    LandType,
    RentDurationValue,
    RentDurationUnit,
    RentPeriod,
}

impl FieldId {
    /// Stable wire name of the field (`price_min`, `road_size_ft`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Lower bounds of BUY ranges. Only visible when the purpose is BUY.
pub const MIN_RANGE_FIELDS: &[FieldId] = &[
    FieldId::PriceMin,
    FieldId::RoadSizeMinFt,
    FieldId::FloorsMin,
    FieldId::MasterBedroomsMin,
    FieldId::CommonBedroomsMin,
    FieldId::CommonBathroomsMin,
    FieldId::LivingRoomsMin,
    FieldId::KitchensMin,
    FieldId::ParkingCarMin,
    FieldId::ParkingBikeMin,
];

/// Upper bounds of BUY ranges, doubling as the single SELL/RENT values.
pub const MAX_OR_SINGLE_FIELDS: &[FieldId] = &[
    FieldId::Price,
    FieldId::RoadSizeFt,
    FieldId::Floors,
    FieldId::MasterBedrooms,
    FieldId::CommonBedrooms,
    FieldId::CommonBathrooms,
    FieldId::LivingRooms,
    FieldId::Kitchens,
    FieldId::ParkingCar,
    FieldId::ParkingBike,
];

/// Rental terms, shown for RENT only.
pub const RENT_ONLY_FIELDS: &[FieldId] =
    &[FieldId::RentDurationValue, FieldId::RentDurationUnit, FieldId::RentPeriod];

/// Shown for LAND only.
pub const LAND_ONLY_FIELDS: &[FieldId] = &[FieldId::LandType];

/// Shown for SELL only.
pub const SELL_ONLY_FIELDS: &[FieldId] = &[FieldId::PriceNegotiable];

/// Building attributes shared by houses and apartments, independent of the
/// listing purpose.
pub const STRUCTURE_FIELDS: &[FieldId] = &[
    FieldId::PropertyCondition,
    FieldId::HasLaundry,
    FieldId::HasStore,
    FieldId::HasPujaRoom,
    FieldId::Furnishing,
];

/// Construction years (Bikram Sambat and AD).
pub const BUILT_YEAR_FIELDS: &[FieldId] = &[FieldId::BuiltYearBs, FieldId::BuiltYearAd];

/// Everything a LAND listing must never show. The price/road fields are
/// included so the land override can re-show exactly the purpose-appropriate
/// subset afterwards; for LAND the visible set is exactly the land type plus
/// that subset, so the purpose extras (negotiable flag, rent terms) are
/// excluded here as well.
pub const LAND_EXCLUDED_FIELDS: &[FieldId] = &[
    FieldId::PropertyCondition,
    FieldId::BuiltYearBs,
    FieldId::BuiltYearAd,
    FieldId::FloorsMin,
    FieldId::Floors,
    FieldId::MasterBedroomsMin,
    FieldId::MasterBedrooms,
    FieldId::CommonBedroomsMin,
    FieldId::CommonBedrooms,
    FieldId::CommonBathroomsMin,
    FieldId::CommonBathrooms,
    FieldId::LivingRoomsMin,
    FieldId::LivingRooms,
    FieldId::KitchensMin,
    FieldId::Kitchens,
    FieldId::HasLaundry,
    FieldId::HasStore,
    FieldId::HasPujaRoom,
    FieldId::Furnishing,
    FieldId::ParkingCarMin,
    FieldId::ParkingCar,
    FieldId::ParkingBikeMin,
    FieldId::ParkingBike,
    FieldId::PriceMin,
    FieldId::Price,
    FieldId::RoadSizeMinFt,
    FieldId::RoadSizeFt,
    FieldId::PriceNegotiable,
    FieldId::RentDurationValue,
    FieldId::RentDurationUnit,
    FieldId::RentPeriod,
];

/// Price/road lower bounds a LAND + BUY pair gets back after the exclusion.
pub const LAND_PRICE_ROAD_MIN_FIELDS: &[FieldId] = &[FieldId::PriceMin, FieldId::RoadSizeMinFt];

/// Price/road single values every LAND pair gets back after the exclusion.
pub const LAND_PRICE_ROAD_MAX_FIELDS: &[FieldId] = &[FieldId::Price, FieldId::RoadSizeFt];

/// The two dropdowns driving the whole form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub purpose: Option<ListingPurpose>,
    pub property_type: Option<PropertyType>,
}

impl ControllerState {
    #[must_use]
    pub const fn new(purpose: Option<ListingPurpose>, property_type: Option<PropertyType>) -> Self {
        Self { purpose, property_type }
    }

    /// Parses the raw dropdown values. Blank or unknown codes stay unset.
    #[must_use]
    pub fn from_codes(purpose: &str, property_type: &str) -> Self {
        Self {
            purpose: ListingPurpose::from_code(purpose),
            property_type: PropertyType::from_code(property_type),
        }
    }

    /// Both controllers carry a recognized value.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.purpose.is_some() && self.property_type.is_some()
    }
}
