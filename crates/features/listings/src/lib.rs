//! Listings feature slice: the property catalog behind the public read API
//! and the admin create path.

mod error;
#[cfg(feature = "server")]
pub mod routes;
pub mod store;

pub use crate::error::{ListingError, ListingErrorExt};
use crate::store::ListingStore;
#[cfg(feature = "server")]
use phub_kernel::domain::registry::InitializedSlice;

/// Listings feature state.
#[phub_derive::phub_slice]
pub struct Listings {
    pub store: ListingStore,
}

/// Initialize the listings feature with an empty catalog.
///
/// # Errors
///
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, ListingError> {
    tracing::info!("Listings slice initialized");

    let inner = ListingsInner { store: ListingStore::new() };

    let slice = Listings::new(inner);
    Ok(InitializedSlice::new(slice))
}
