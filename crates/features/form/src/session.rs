//! One open admin form, driven by change and input events.
//!
//! The session owns the controller pair, the land-size sheet and a snapshot
//! of every row. Each event is handled synchronously and completely before
//! the next: handlers recompute from current values rather than patching,
//! so replaying the same event is harmless.

use crate::area::{AreaSheet, AreaUnit};
use crate::fields::ControllerState;
use crate::rules::compute_visibility;
use crate::surface::{FormSnapshot, render};
use phub_domain::listing::{ListingPurpose, PropertyType};

/// A user interaction the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The listing-purpose dropdown changed (`None` = back to the blank row).
    PurposeChanged(Option<ListingPurpose>),
    /// The property-type dropdown changed.
    PropertyTypeChanged(Option<PropertyType>),
    /// A land-size field received input.
    AreaInput { unit: AreaUnit, value: String },
}

/// State of one open listing form.
#[derive(Debug, Clone)]
pub struct FormSession {
    controllers: ControllerState,
    sheet: AreaSheet,
    snapshot: FormSnapshot,
    total: String,
}

impl FormSession {
    /// A fresh form: controllers blank, every row hidden, total `0.00`.
    /// Matches the initial render pass a just-opened form performs.
    #[must_use]
    pub fn new() -> Self {
        let controllers = ControllerState::default();
        let sheet = AreaSheet::new();
        let mut snapshot = FormSnapshot::complete();
        render(&compute_visibility(controllers), &mut snapshot);
        let total = sheet.formatted_total();

        Self { controllers, sheet, snapshot, total }
    }

    /// Handles one event to completion.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::PurposeChanged(purpose) => {
                self.controllers.purpose = purpose;
                self.rerender();
            },
            FormEvent::PropertyTypeChanged(property_type) => {
                self.controllers.property_type = property_type;
                self.rerender();
            },
            FormEvent::AreaInput { unit, value } => {
                self.sheet.record(unit, value);
                self.total = self.sheet.formatted_total();
            },
        }
    }

    fn rerender(&mut self) {
        render(&compute_visibility(self.controllers), &mut self.snapshot);
    }

    #[must_use]
    pub const fn controllers(&self) -> ControllerState {
        self.controllers
    }

    #[must_use]
    pub const fn layout(&self) -> &FormSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub const fn area_sheet(&self) -> &AreaSheet {
        &self.sheet
    }

    /// The formatted square-feet total, as the output field shows it.
    #[must_use]
    pub fn total(&self) -> &str {
        &self.total
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
