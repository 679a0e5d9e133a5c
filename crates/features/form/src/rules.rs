//! Visibility rules for the listing admin form.
//!
//! The engine is a declarative table: each entry pairs a predicate over the
//! two controller dropdowns with a field group and a target visibility.
//! Evaluation folds the table over an all-hidden baseline in a fixed order,
//! and a later entry overwrites an earlier one. That ordering replaces the
//! incremental show/hide toggling that kept reintroducing order-dependent
//! bugs in the form scripts this engine supersedes.
//!
//! The land exclusion ([`RULES`] entries 8-10) runs last on purpose: LAND
//! listings never expose building fields, whatever the purpose rules said
//! before, and then win back only their price/road subset.

use crate::fields::{
    BUILT_YEAR_FIELDS, ControllerState, FieldId, LAND_EXCLUDED_FIELDS, LAND_ONLY_FIELDS,
    LAND_PRICE_ROAD_MAX_FIELDS, LAND_PRICE_ROAD_MIN_FIELDS, MAX_OR_SINGLE_FIELDS,
    MIN_RANGE_FIELDS, RENT_ONLY_FIELDS, SELL_ONLY_FIELDS, STRUCTURE_FIELDS,
};
use phub_domain::listing::{ListingPurpose, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Complete field-to-visibility mapping for one controller pair.
///
/// Always covers every controlled field; recomputed from scratch on every
/// evaluation, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityMap {
    entries: BTreeMap<FieldId, bool>,
}

impl VisibilityMap {
    /// The reset baseline: every controlled field hidden.
    #[must_use]
    pub fn all_hidden() -> Self {
        Self { entries: FieldId::iter().map(|field| (field, false)).collect() }
    }

    fn set(&mut self, field: FieldId, visible: bool) {
        self.entries.insert(field, visible);
    }

    #[must_use]
    pub fn is_visible(&self, field: FieldId) -> bool {
        self.entries.get(&field).copied().unwrap_or(false)
    }

    /// Fields the map marks visible, in stable order.
    pub fn visible_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.entries.iter().filter(|(_, visible)| **visible).map(|(field, _)| *field)
    }

    /// All entries, in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, bool)> + '_ {
        self.entries.iter().map(|(field, visible)| (*field, *visible))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// One row of the rule table.
struct Rule {
    name: &'static str,
    applies: fn(ControllerState) -> bool,
    fields: &'static [FieldId],
    visible: bool,
}

fn always(_: ControllerState) -> bool {
    true
}

fn buying(state: ControllerState) -> bool {
    state.purpose == Some(ListingPurpose::Buy)
}

fn selling(state: ControllerState) -> bool {
    state.purpose == Some(ListingPurpose::Sell)
}

fn renting(state: ControllerState) -> bool {
    state.purpose == Some(ListingPurpose::Rent)
}

fn built_structure(state: ControllerState) -> bool {
    state.property_type.is_some_and(PropertyType::is_built_structure)
}

fn resale_structure(state: ControllerState) -> bool {
    built_structure(state) && (selling(state) || renting(state))
}

fn land(state: ControllerState) -> bool {
    state.property_type == Some(PropertyType::Land)
}

fn land_buying(state: ControllerState) -> bool {
    land(state) && buying(state)
}

fn land_resale(state: ControllerState) -> bool {
    land(state) && (selling(state) || renting(state))
}

/// The rule table. Order is part of the contract: later entries win.
const RULES: &[Rule] = &[
    Rule { name: "max-or-single", applies: always, fields: MAX_OR_SINGLE_FIELDS, visible: true },
    Rule { name: "buy-min-range", applies: buying, fields: MIN_RANGE_FIELDS, visible: true },
    Rule { name: "rent-terms", applies: renting, fields: RENT_ONLY_FIELDS, visible: true },
    Rule { name: "sell-negotiable", applies: selling, fields: SELL_ONLY_FIELDS, visible: true },
    Rule { name: "structure", applies: built_structure, fields: STRUCTURE_FIELDS, visible: true },
    Rule {
        name: "structure-built-year",
        applies: resale_structure,
        fields: BUILT_YEAR_FIELDS,
        visible: true,
    },
    Rule { name: "land-type", applies: land, fields: LAND_ONLY_FIELDS, visible: true },
    Rule { name: "land-exclusion", applies: land, fields: LAND_EXCLUDED_FIELDS, visible: false },
    Rule {
        name: "land-buy-price-road-min",
        applies: land_buying,
        fields: LAND_PRICE_ROAD_MIN_FIELDS,
        visible: true,
    },
    Rule {
        name: "land-buy-price-road-max",
        applies: land_buying,
        fields: LAND_PRICE_ROAD_MAX_FIELDS,
        visible: true,
    },
    Rule {
        name: "land-resale-price-road",
        applies: land_resale,
        fields: LAND_PRICE_ROAD_MAX_FIELDS,
        visible: true,
    },
];

/// Computes the visibility map for a controller pair.
///
/// Resets every field to hidden first; with an incomplete pair that baseline
/// is the result. Otherwise the rule table is folded in order, later matches
/// overwriting earlier ones. Total and idempotent: no input panics, and the
/// same pair always yields the same map.
#[must_use]
pub fn compute_visibility(state: ControllerState) -> VisibilityMap {
    let mut map = VisibilityMap::all_hidden();

    if !state.is_complete() {
        return map;
    }

    for rule in RULES {
        if (rule.applies)(state) {
            tracing::trace!(rule = rule.name, visible = rule.visible, "rule matched");
            for field in rule.fields {
                map.set(*field, rule.visible);
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(purpose: ListingPurpose, property_type: PropertyType) -> ControllerState {
        ControllerState::new(Some(purpose), Some(property_type))
    }

    #[test]
    fn incomplete_pairs_hide_everything() {
        let states = [
            ControllerState::default(),
            ControllerState::new(Some(ListingPurpose::Buy), None),
            ControllerState::new(None, Some(PropertyType::House)),
        ];
        for state in states {
            let map = compute_visibility(state);
            assert_eq!(map.visible_fields().count(), 0, "expected all hidden for {state:?}");
        }
    }

    #[test]
    fn every_controlled_field_is_covered() {
        let map = compute_visibility(pair(ListingPurpose::Sell, PropertyType::House));
        assert_eq!(map.len(), FieldId::iter().count());
    }

    #[test]
    fn land_exclusion_wins_over_purpose_rules() {
        for purpose in ListingPurpose::ALL {
            let map = compute_visibility(pair(purpose, PropertyType::Land));
            for field in crate::fields::STRUCTURE_FIELDS {
                assert!(!map.is_visible(*field), "{field:?} leaked for LAND + {purpose:?}");
            }
            assert!(!map.is_visible(FieldId::Floors));
            assert!(!map.is_visible(FieldId::ParkingBikeMin));
            assert!(map.is_visible(FieldId::LandType));
        }
    }

    #[test]
    fn land_visible_set_is_exactly_land_type_plus_price_road() {
        let expected: &[(ListingPurpose, &[FieldId])] = &[
            (
                ListingPurpose::Buy,
                &[
                    FieldId::PriceMin,
                    FieldId::Price,
                    FieldId::RoadSizeMinFt,
                    FieldId::RoadSizeFt,
                    FieldId::LandType,
                ],
            ),
            (ListingPurpose::Sell, &[FieldId::Price, FieldId::RoadSizeFt, FieldId::LandType]),
            (ListingPurpose::Rent, &[FieldId::Price, FieldId::RoadSizeFt, FieldId::LandType]),
        ];

        for (purpose, fields) in expected {
            let map = compute_visibility(pair(*purpose, PropertyType::Land));
            let visible: Vec<FieldId> = map.visible_fields().collect();
            let mut wanted: Vec<FieldId> = fields.to_vec();
            wanted.sort();
            assert_eq!(visible, wanted, "visible set mismatch for LAND + {purpose:?}");
        }
    }

    #[test]
    fn land_buy_reshows_both_price_road_variants() {
        let map = compute_visibility(pair(ListingPurpose::Buy, PropertyType::Land));
        assert!(map.is_visible(FieldId::PriceMin));
        assert!(map.is_visible(FieldId::Price));
        assert!(map.is_visible(FieldId::RoadSizeMinFt));
        assert!(map.is_visible(FieldId::RoadSizeFt));
    }

    #[test]
    fn land_resale_reshows_only_single_variants() {
        for purpose in [ListingPurpose::Sell, ListingPurpose::Rent] {
            let map = compute_visibility(pair(purpose, PropertyType::Land));
            assert!(!map.is_visible(FieldId::PriceMin));
            assert!(map.is_visible(FieldId::Price));
            assert!(!map.is_visible(FieldId::RoadSizeMinFt));
            assert!(map.is_visible(FieldId::RoadSizeFt));
        }
    }

    #[test]
    fn built_year_shows_for_resale_structures_only() {
        assert!(
            compute_visibility(pair(ListingPurpose::Sell, PropertyType::House))
                .is_visible(FieldId::BuiltYearBs)
        );
        assert!(
            compute_visibility(pair(ListingPurpose::Rent, PropertyType::Apartment))
                .is_visible(FieldId::BuiltYearAd)
        );
        assert!(
            !compute_visibility(pair(ListingPurpose::Buy, PropertyType::House))
                .is_visible(FieldId::BuiltYearBs)
        );
    }
}
