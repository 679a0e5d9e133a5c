//! Shared string constants for entities and API documentation tags.

// Entity names
pub const LISTING: &str = "listing";
pub const STATE: &str = "state";
pub const DISTRICT: &str = "district";
pub const FACILITY: &str = "facility";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const FORM_TAG: &str = "Form";
pub const GEO_TAG: &str = "Geo";
pub const LISTINGS_TAG: &str = "Listings";
