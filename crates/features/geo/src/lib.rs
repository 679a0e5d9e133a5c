//! Geo feature slice: Nepal's provinces and districts for the cascading
//! location dropdowns.

pub mod directory;
mod error;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::{GeoError, GeoErrorExt};
use crate::directory::Directory;
#[cfg(feature = "server")]
use phub_kernel::domain::registry::InitializedSlice;

/// Geo feature state.
#[phub_derive::phub_slice]
pub struct Geo {
    pub directory: Directory,
}

/// Initialize the geo feature with the seeded location directory.
///
/// # Errors
///
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, GeoError> {
    let directory = Directory::seeded();
    tracing::info!(
        states = directory.states().len(),
        districts = directory.district_count(),
        "Geo slice initialized"
    );

    let inner = GeoInner { directory };

    let slice = Geo::new(inner);
    Ok(InitializedSlice::new(slice))
}
