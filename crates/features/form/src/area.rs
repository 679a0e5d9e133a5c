//! Land-area calculation over the two Nepali unit systems.
//!
//! Hill-region parcels are measured in ropani/aana/paisa/dam, plains parcels
//! in bigha/katha/dhur. A sheet accepts input for both systems but only one
//! may hold values at a time: writing into one group clears the other. The
//! total is always reported in square feet with two decimals.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The two mutually exclusive measurement systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnitGroup {
    Hilly,
    Terai,
}

impl UnitGroup {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Hilly => Self::Terai,
            Self::Terai => Self::Hilly,
        }
    }
}

/// A single land-area unit and its square-feet factor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AreaUnit {
    Ropani,
    Aana,
    Paisa,
    Dam,
    Bigha,
    Katha,
    Dhur,
}

impl AreaUnit {
    /// Square feet per one unit.
    #[must_use]
    pub const fn square_feet(self) -> f64 {
        match self {
            Self::Ropani => 5476.0,
            Self::Aana => 342.25,
            Self::Paisa => 85.56,
            Self::Dam => 21.39,
            Self::Bigha => 72900.0,
            Self::Katha => 3645.0,
            Self::Dhur => 182.25,
        }
    }

    /// The measurement system this unit belongs to.
    #[must_use]
    pub const fn group(self) -> UnitGroup {
        match self {
            Self::Ropani | Self::Aana | Self::Paisa | Self::Dam => UnitGroup::Hilly,
            Self::Bigha | Self::Katha | Self::Dhur => UnitGroup::Terai,
        }
    }

    /// Stable wire name of the unit (`ropani`, `bigha`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Raw input state of the seven land-size fields.
///
/// Slots keep the text exactly as entered; parsing happens at total time so
/// the sheet can mirror the form without losing what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaSheet {
    slots: [String; 7],
}

impl AreaSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a unit slot.
    #[must_use]
    pub fn value(&self, unit: AreaUnit) -> &str {
        &self.slots[unit.index()]
    }

    /// Records an input event on one unit field.
    ///
    /// A non-blank value claims the unit's group for the sheet and clears
    /// every slot of the opposite group. Blank input only updates the slot;
    /// it neither claims nor releases a group.
    pub fn record(&mut self, unit: AreaUnit, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.clear_group(unit.group().opposite());
        }
        self.slots[unit.index()] = value;
    }

    /// Blanks every slot of a group.
    pub fn clear_group(&mut self, group: UnitGroup) {
        for unit in AreaUnit::iter().filter(|unit| unit.group() == group) {
            self.slots[unit.index()].clear();
        }
    }

    /// Whether any slot of the group holds a non-blank value.
    #[must_use]
    pub fn group_has_input(&self, group: UnitGroup) -> bool {
        AreaUnit::iter()
            .filter(|unit| unit.group() == group)
            .any(|unit| !self.value(unit).trim().is_empty())
    }

    /// The group the total is computed from: hilly as soon as any hilly slot
    /// has input, terai otherwise (including the all-empty sheet).
    #[must_use]
    pub fn active_group(&self) -> UnitGroup {
        if self.group_has_input(UnitGroup::Hilly) { UnitGroup::Hilly } else { UnitGroup::Terai }
    }

    /// Total area over the active group, in square feet.
    #[must_use]
    pub fn total_square_feet(&self) -> f64 {
        let group = self.active_group();
        AreaUnit::iter()
            .filter(|unit| unit.group() == group)
            .map(|unit| parse_count(self.value(unit)) as f64 * unit.square_feet())
            .sum()
    }

    /// Total formatted for the read-only output field: always two decimals.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total_square_feet())
    }
}

/// Integer count of a raw field value: the longest leading digit run of the
/// trimmed input. Fractional input truncates toward zero ("3.7" is 3) and
/// junk parses to zero.
fn parse_count(raw: &str) -> u64 {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ropani_converts_exactly() {
        let mut sheet = AreaSheet::new();
        sheet.record(AreaUnit::Ropani, "1");
        assert_eq!(sheet.active_group(), UnitGroup::Hilly);
        assert_eq!(sheet.formatted_total(), "5476.00");
    }

    #[test]
    fn one_bigha_converts_exactly() {
        let mut sheet = AreaSheet::new();
        sheet.record(AreaUnit::Bigha, "1");
        assert_eq!(sheet.active_group(), UnitGroup::Terai);
        assert_eq!(sheet.formatted_total(), "72900.00");
    }

    #[test]
    fn empty_sheet_totals_zero() {
        let sheet = AreaSheet::new();
        assert_eq!(sheet.active_group(), UnitGroup::Terai);
        assert_eq!(sheet.formatted_total(), "0.00");
    }

    #[test]
    fn mixed_hilly_counts_sum_per_factor() {
        let mut sheet = AreaSheet::new();
        sheet.record(AreaUnit::Ropani, "2");
        sheet.record(AreaUnit::Aana, "3");
        sheet.record(AreaUnit::Paisa, "1");
        sheet.record(AreaUnit::Dam, "4");
        // 2*5476 + 3*342.25 + 1*85.56 + 4*21.39
        assert_eq!(sheet.formatted_total(), "12149.87");
    }

    #[test]
    fn terai_input_clears_hilly_group() {
        let mut sheet = AreaSheet::new();
        sheet.record(AreaUnit::Ropani, "5");
        sheet.record(AreaUnit::Aana, "2");
        sheet.record(AreaUnit::Katha, "1");

        assert!(!sheet.group_has_input(UnitGroup::Hilly));
        assert_eq!(sheet.value(AreaUnit::Ropani), "");
        assert_eq!(sheet.active_group(), UnitGroup::Terai);
        assert_eq!(sheet.formatted_total(), "3645.00");
    }

    #[test]
    fn blank_input_does_not_claim_a_group() {
        let mut sheet = AreaSheet::new();
        sheet.record(AreaUnit::Ropani, "5");
        sheet.record(AreaUnit::Bigha, "   ");
        assert!(sheet.group_has_input(UnitGroup::Hilly));
        assert_eq!(sheet.active_group(), UnitGroup::Hilly);
        assert_eq!(sheet.formatted_total(), "27380.00");
    }

    #[test]
    fn fractional_and_junk_input_parse_like_counts() {
        let mut sheet = AreaSheet::new();
        sheet.record(AreaUnit::Ropani, "3.7");
        assert_eq!(sheet.formatted_total(), "16428.00");

        sheet.record(AreaUnit::Ropani, "abc");
        assert_eq!(sheet.formatted_total(), "0.00");

        sheet.record(AreaUnit::Ropani, " 12x ");
        assert_eq!(sheet.formatted_total(), "65712.00");
    }
}
