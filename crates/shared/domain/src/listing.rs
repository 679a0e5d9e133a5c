//! Property listing model and its enumerated field vocabularies.
//!
//! Enum codes are the wire values of the listing API (`BUY`, `LAND`,
//! `USED_LESS_5`, ...). Keep them stable: stored listings and form payloads
//! both round-trip through them.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Listing intent: what the author wants to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingPurpose {
    Buy,
    Sell,
    Rent,
}

impl ListingPurpose {
    pub const ALL: [Self; 3] = [Self::Buy, Self::Sell, Self::Rent];

    /// Wire code for this purpose.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Rent => "RENT",
        }
    }

    /// Lenient parse of a wire code. Unknown or blank input yields `None`,
    /// which downstream rule evaluation treats as "unset".
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "BUY" => Some(Self::Buy),
            "SELL" => Some(Self::Sell),
            "RENT" => Some(Self::Rent),
            _ => None,
        }
    }
}

/// Kind of property the listing is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    Land,
    House,
    Apartment,
}

impl PropertyType {
    pub const ALL: [Self; 3] = [Self::Land, Self::House, Self::Apartment];

    /// Wire code for this property type.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Land => "LAND",
            Self::House => "HOUSE",
            Self::Apartment => "APARTMENT",
        }
    }

    /// Lenient parse of a wire code; unknown input yields `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "LAND" => Some(Self::Land),
            "HOUSE" => Some(Self::House),
            "APARTMENT" => Some(Self::Apartment),
            _ => None,
        }
    }

    /// Houses and apartments share the building-specific field set.
    #[must_use]
    pub const fn is_built_structure(self) -> bool {
        matches!(self, Self::House | Self::Apartment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceNegotiability {
    Fixed,
    Negotiable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoadCondition {
    Any,
    Pitched,
    Graveled,
    Soil,
}

/// Compass orientation of the main entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingDirection {
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "NE")]
    Northeast,
    #[serde(rename = "NW")]
    Northwest,
    #[serde(rename = "SE")]
    Southeast,
    #[serde(rename = "SW")]
    Southwest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LandType {
    Residential,
    Commercial,
    Agricultural,
    Industrial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyCondition {
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "JUST_USED")]
    JustUsed,
    #[serde(rename = "USED_LESS_5")]
    UsedLess5,
    #[serde(rename = "USED_MORE_5")]
    UsedMore5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Furnishing {
    Full,
    Semi,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RentDurationUnit {
    Months,
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RentPeriod {
    Monthly,
    Yearly,
}

bitflags! {
    /// Built-in amenity flags of a house or apartment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Amenities: u32 {
        const LAUNDRY = 1 << 0;
        const STORE = 1 << 1;
        const PUJA_ROOM = 1 << 2;

        const ALL = Self::LAUNDRY.bits() | Self::STORE.bits() | Self::PUJA_ROOM.bits();
    }
}

impl Default for Amenities {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<u32> for Amenities {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for Amenities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Amenities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// A single comprehensive record for land, house and apartment listings,
/// for buy, sell or rent.
///
/// Which optional fields are expected to carry values depends on the
/// (purpose, property type) pair; that policy lives in the form feature,
/// not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    /// Minted by the catalog on insert; blank in drafts.
    #[serde(default)]
    pub id: String,
    pub listing_purpose: ListingPurpose,
    pub property_type: PropertyType,

    // Basic information
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// UNIX timestamp (seconds) when the listing was created.
    #[serde(default)]
    pub created_at: i64,
    /// UNIX timestamp (seconds) of the last update.
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,

    // Location
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub local_area: Option<String>,

    // Price ('price_min' is the lower bound of a BUY range; 'price' is the
    // upper bound or the single SELL/RENT value)
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_negotiable: Option<PriceNegotiability>,

    // Land size, captured per unit; the derived square-feet total is computed
    // by the form feature
    #[serde(default)]
    pub size_ropani: Option<u32>,
    #[serde(default)]
    pub size_aana: Option<u32>,
    #[serde(default)]
    pub size_paisa: Option<u32>,
    #[serde(default)]
    pub size_dam: Option<u32>,
    #[serde(default)]
    pub size_bigha: Option<u32>,
    #[serde(default)]
    pub size_katha: Option<u32>,
    #[serde(default)]
    pub size_dhur: Option<u32>,
    #[serde(default)]
    pub total_land_area_sqft: Option<f64>,

    // Road access
    #[serde(default)]
    pub road_size_min_ft: Option<u32>,
    #[serde(default)]
    pub road_size_ft: Option<u32>,
    #[serde(default)]
    pub road_condition: Option<RoadCondition>,
    #[serde(default)]
    pub facing_direction: Option<FacingDirection>,

    // Land specific
    #[serde(default)]
    pub land_type: Option<LandType>,

    // House & apartment specific
    #[serde(default)]
    pub property_condition: Option<PropertyCondition>,
    #[serde(default)]
    pub built_year_bs: Option<u32>,
    #[serde(default)]
    pub built_year_ad: Option<u32>,
    #[serde(default)]
    pub floors_min: Option<u32>,
    #[serde(default)]
    pub floors: Option<u32>,
    #[serde(default)]
    pub master_bedrooms_min: Option<u32>,
    #[serde(default)]
    pub master_bedrooms: Option<u32>,
    #[serde(default)]
    pub common_bedrooms_min: Option<u32>,
    #[serde(default)]
    pub common_bedrooms: Option<u32>,
    #[serde(default)]
    pub common_bathrooms_min: Option<u32>,
    #[serde(default)]
    pub common_bathrooms: Option<u32>,
    #[serde(default)]
    pub living_rooms_min: Option<u32>,
    #[serde(default)]
    pub living_rooms: Option<u32>,
    #[serde(default)]
    pub kitchens_min: Option<u32>,
    #[serde(default)]
    pub kitchens: Option<u32>,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub furnishing: Option<Furnishing>,
    #[serde(default)]
    pub parking_car_min: Option<u32>,
    #[serde(default)]
    pub parking_car: Option<u32>,
    #[serde(default)]
    pub parking_bike_min: Option<u32>,
    #[serde(default)]
    pub parking_bike: Option<u32>,

    // Rental specific
    #[serde(default)]
    pub rent_duration_value: Option<u32>,
    #[serde(default)]
    pub rent_duration_unit: Option<RentDurationUnit>,
    #[serde(default)]
    pub rent_period: Option<RentPeriod>,

    // Facilities: curated names plus a free-text overflow
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub other_facilities: Option<String>,
}

const fn default_active() -> bool {
    true
}
