//! # Admin Form Engine
//!
//! This crate implements the two behaviors behind the listing admin form:
//! conditional field visibility and land-area totalling. Both are pure
//! functions of the current form values, re-evaluated in full on every
//! event; nothing here touches I/O.
//!
//! ## Architecture
//!
//! 1. **Rules ([`rules`]):** a declarative, ordered rule table mapping the
//!    (purpose, property type) controller pair to a complete visibility map.
//!    Later rules overwrite earlier ones; the land exclusion runs last.
//! 2. **Area ([`area`]):** the land-size sheet with the hilly/terai unit
//!    conversion table and the mutual-exclusivity invariant between the two
//!    unit systems.
//! 3. **Surface ([`surface`]):** computing and rendering stay separate. A
//!    [`surface::FormSurface`] decides where (and whether) each row exists;
//!    the renderer applies a map to it.
//! 4. **Session ([`session`]):** a synchronous event loop over one open
//!    form, the composition root of the three parts above.
//!
//! The [`audit`] module re-applies the visibility policy to listings that
//! arrive through the API instead of the form.

pub mod area;
pub mod audit;
mod error;
pub mod fields;
pub mod rules;
#[cfg(feature = "server")]
pub mod routes;
pub mod session;
pub mod surface;

pub use crate::error::{FormError, FormErrorExt};
#[cfg(feature = "server")]
use phub_kernel::domain::registry::InitializedSlice;

/// Form feature state.
///
/// The engine itself is stateless; the slice only anchors the feature in
/// the kernel registry.
#[phub_derive::phub_slice]
pub struct Form {}

/// Initialize the form feature.
///
/// # Errors
///
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, FormError> {
    tracing::info!("Form slice initialized");

    let inner = FormInner {};

    let slice = Form::new(inner);
    Ok(InitializedSlice::new(slice))
}
