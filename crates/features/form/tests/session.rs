use phub_domain::listing::{ListingPurpose, PropertyType};
use phub_form::area::{AreaUnit, UnitGroup};
use phub_form::fields::FieldId;
use phub_form::session::{FormEvent, FormSession};

fn area(unit: AreaUnit, value: &str) -> FormEvent {
    FormEvent::AreaInput { unit, value: value.to_owned() }
}

#[test]
fn fresh_session_hides_everything_and_totals_zero() {
    let session = FormSession::new();
    assert_eq!(session.layout().visible_rows().count(), 0);
    assert_eq!(session.total(), "0.00");
}

#[test]
fn selecting_both_controllers_reveals_fields() {
    let mut session = FormSession::new();

    session.apply(FormEvent::PurposeChanged(Some(ListingPurpose::Buy)));
    assert_eq!(session.layout().visible_rows().count(), 0, "one controller is not enough");

    session.apply(FormEvent::PropertyTypeChanged(Some(PropertyType::House)));
    assert_eq!(session.layout().row_visibility(FieldId::PriceMin), Some(true));
    assert_eq!(session.layout().row_visibility(FieldId::LandType), Some(false));
}

#[test]
fn clearing_a_controller_resets_the_form() {
    let mut session = FormSession::new();
    session.apply(FormEvent::PurposeChanged(Some(ListingPurpose::Sell)));
    session.apply(FormEvent::PropertyTypeChanged(Some(PropertyType::Apartment)));
    assert!(session.layout().visible_rows().count() > 0);

    session.apply(FormEvent::PurposeChanged(None));
    assert_eq!(session.layout().visible_rows().count(), 0);
}

#[test]
fn switching_property_type_to_land_drops_building_rows() {
    let mut session = FormSession::new();
    session.apply(FormEvent::PurposeChanged(Some(ListingPurpose::Sell)));
    session.apply(FormEvent::PropertyTypeChanged(Some(PropertyType::House)));
    assert_eq!(session.layout().row_visibility(FieldId::Floors), Some(true));

    session.apply(FormEvent::PropertyTypeChanged(Some(PropertyType::Land)));
    assert_eq!(session.layout().row_visibility(FieldId::Floors), Some(false));
    assert_eq!(session.layout().row_visibility(FieldId::LandType), Some(true));
    assert_eq!(session.layout().row_visibility(FieldId::Price), Some(true));
}

#[test]
fn area_events_drive_the_total() {
    let mut session = FormSession::new();

    session.apply(area(AreaUnit::Ropani, "1"));
    assert_eq!(session.total(), "5476.00");

    session.apply(area(AreaUnit::Aana, "2"));
    assert_eq!(session.total(), "6160.50");
}

#[test]
fn terai_input_clears_hilly_and_switches_group() {
    let mut session = FormSession::new();
    session.apply(area(AreaUnit::Ropani, "2"));
    session.apply(area(AreaUnit::Dam, "3"));
    assert_eq!(session.area_sheet().active_group(), UnitGroup::Hilly);

    session.apply(area(AreaUnit::Bigha, "1"));
    assert_eq!(session.area_sheet().active_group(), UnitGroup::Terai);
    assert_eq!(session.area_sheet().value(AreaUnit::Ropani), "");
    assert_eq!(session.area_sheet().value(AreaUnit::Dam), "");
    assert_eq!(session.total(), "72900.00");
}

#[test]
fn replaying_an_event_changes_nothing() {
    let mut session = FormSession::new();
    session.apply(FormEvent::PurposeChanged(Some(ListingPurpose::Rent)));
    session.apply(FormEvent::PropertyTypeChanged(Some(PropertyType::Apartment)));
    session.apply(area(AreaUnit::Katha, "4"));

    let layout_before = session.layout().clone();
    let total_before = session.total().to_owned();

    session.apply(FormEvent::PropertyTypeChanged(Some(PropertyType::Apartment)));
    session.apply(area(AreaUnit::Katha, "4"));

    assert_eq!(session.layout(), &layout_before);
    assert_eq!(session.total(), total_before);
}
