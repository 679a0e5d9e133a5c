//! Rendering a visibility map onto whatever displays the form.
//!
//! The engine computes, the surface displays; keeping the two apart is what
//! makes the rules testable without a UI. A surface only has to answer one
//! question per field: "where does its visibility live, if the row exists
//! at all?" Rows a surface does not have are silently skipped.

use crate::fields::FieldId;
use crate::rules::VisibilityMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Anything that can show or hide form rows.
pub trait FormSurface {
    /// Mutable visibility slot of a field row, or `None` when the surface
    /// has no such row.
    fn visibility_slot(&mut self, field: FieldId) -> Option<&mut bool>;
}

/// Applies a visibility map to a surface. Missing rows are skipped.
pub fn render<S>(map: &VisibilityMap, surface: &mut S)
where
    S: FormSurface + ?Sized,
{
    for (field, visible) in map.iter() {
        if let Some(slot) = surface.visibility_slot(field) {
            *slot = visible;
        }
    }
}

/// In-memory surface: one visibility flag per present row.
///
/// Doubles as the session's view of the form and as the test double for
/// render behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    rows: BTreeMap<FieldId, bool>,
}

impl FormSnapshot {
    /// A snapshot containing every controlled row, all hidden.
    #[must_use]
    pub fn complete() -> Self {
        Self { rows: FieldId::iter().map(|field| (field, false)).collect() }
    }

    /// A snapshot containing only the given rows (a form variant that does
    /// not render every field).
    pub fn with_rows(fields: impl IntoIterator<Item = FieldId>) -> Self {
        Self { rows: fields.into_iter().map(|field| (field, false)).collect() }
    }

    /// Visibility of a row, or `None` when the row is absent.
    #[must_use]
    pub fn row_visibility(&self, field: FieldId) -> Option<bool> {
        self.rows.get(&field).copied()
    }

    /// Rows currently visible, in stable order.
    pub fn visible_rows(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.rows.iter().filter(|(_, visible)| **visible).map(|(field, _)| *field)
    }
}

impl FormSurface for FormSnapshot {
    fn visibility_slot(&mut self, field: FieldId) -> Option<&mut bool> {
        self.rows.get_mut(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ControllerState;
    use crate::rules::compute_visibility;
    use phub_domain::listing::{ListingPurpose, PropertyType};

    #[test]
    fn render_skips_missing_rows() {
        let map = compute_visibility(ControllerState::new(
            Some(ListingPurpose::Buy),
            Some(PropertyType::House),
        ));

        let mut partial = FormSnapshot::with_rows([FieldId::Price, FieldId::LandType]);
        render(&map, &mut partial);

        assert_eq!(partial.row_visibility(FieldId::Price), Some(true));
        assert_eq!(partial.row_visibility(FieldId::LandType), Some(false));
        // Rows the surface never had stay absent.
        assert_eq!(partial.row_visibility(FieldId::Floors), None);
    }

    #[test]
    fn render_overwrites_previous_state() {
        let buy_house = compute_visibility(ControllerState::new(
            Some(ListingPurpose::Buy),
            Some(PropertyType::House),
        ));
        let incomplete = compute_visibility(ControllerState::default());

        let mut snapshot = FormSnapshot::complete();
        render(&buy_house, &mut snapshot);
        assert!(snapshot.row_visibility(FieldId::FloorsMin).unwrap());

        render(&incomplete, &mut snapshot);
        assert_eq!(snapshot.visible_rows().count(), 0);
    }
}
