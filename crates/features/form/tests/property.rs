use phub_domain::listing::{ListingPurpose, PropertyType};
use phub_form::area::{AreaUnit, UnitGroup};
use phub_form::fields::{ControllerState, FieldId};
use phub_form::rules::compute_visibility;
use phub_form::session::{FormEvent, FormSession};
use proptest::prelude::*;
use proptest::sample::select;

fn purpose_strategy() -> impl Strategy<Value = Option<ListingPurpose>> {
    select(vec![
        None,
        Some(ListingPurpose::Buy),
        Some(ListingPurpose::Sell),
        Some(ListingPurpose::Rent),
    ])
}

fn property_type_strategy() -> impl Strategy<Value = Option<PropertyType>> {
    select(vec![
        None,
        Some(PropertyType::Land),
        Some(PropertyType::House),
        Some(PropertyType::Apartment),
    ])
}

fn unit_strategy() -> impl Strategy<Value = AreaUnit> {
    select(vec![
        AreaUnit::Ropani,
        AreaUnit::Aana,
        AreaUnit::Paisa,
        AreaUnit::Dam,
        AreaUnit::Bigha,
        AreaUnit::Katha,
        AreaUnit::Dhur,
    ])
}

fn event_strategy() -> impl Strategy<Value = FormEvent> {
    prop_oneof![
        purpose_strategy().prop_map(FormEvent::PurposeChanged),
        property_type_strategy().prop_map(FormEvent::PropertyTypeChanged),
        (unit_strategy(), "([0-9]{1,4}|[a-z]{0,3}| *)")
            .prop_map(|(unit, value)| FormEvent::AreaInput { unit, value }),
    ]
}

proptest! {
    #[test]
    fn recompute_is_idempotent_for_any_pair(
        purpose in purpose_strategy(),
        property_type in property_type_strategy(),
    ) {
        let state = ControllerState::new(purpose, property_type);
        prop_assert_eq!(compute_visibility(state), compute_visibility(state));
    }

    #[test]
    fn incomplete_pairs_always_hide_everything(
        purpose in purpose_strategy(),
        property_type in property_type_strategy(),
    ) {
        let state = ControllerState::new(purpose, property_type);
        prop_assume!(!state.is_complete());
        prop_assert_eq!(compute_visibility(state).visible_fields().count(), 0);
    }

    #[test]
    fn land_only_ever_shows_land_type_and_price_road(purpose in purpose_strategy()) {
        prop_assume!(purpose.is_some());
        let state = ControllerState::new(purpose, Some(PropertyType::Land));
        let allowed = [
            FieldId::LandType,
            FieldId::Price,
            FieldId::RoadSizeFt,
            FieldId::PriceMin,
            FieldId::RoadSizeMinFt,
        ];
        for field in compute_visibility(state).visible_fields() {
            prop_assert!(allowed.contains(&field), "{field:?} visible for LAND");
        }
    }

    #[test]
    fn unit_groups_stay_mutually_exclusive(
        events in proptest::collection::vec(event_strategy(), 0..48),
    ) {
        let mut session = FormSession::new();
        for event in events {
            session.apply(event);
        }

        let sheet = session.area_sheet();
        prop_assert!(
            !(sheet.group_has_input(UnitGroup::Hilly) && sheet.group_has_input(UnitGroup::Terai)),
            "both unit groups hold input: {sheet:?}"
        );
    }

    #[test]
    fn total_always_carries_two_decimals(
        events in proptest::collection::vec(event_strategy(), 0..48),
    ) {
        let mut session = FormSession::new();
        for event in events {
            session.apply(event);
        }

        let total = session.total();
        let (whole, fraction) = total.split_once('.').expect("total has a decimal point");
        prop_assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(fraction.len(), 2);
    }
}
