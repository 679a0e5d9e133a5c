//! Facade crate for `PropertyHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `phub` with the desired feature flags (`server`/`client`).
//! - Call `phub::init` (server) to register feature slices; extend as new slices appear.

pub use phub_domain as domain;
#[cfg(feature = "server")]
use phub_domain::config::ApiConfig;
pub use phub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use phub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use phub_form as form;
    pub use phub_geo as geo;
    pub use phub_listings as listings;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "server")]
        "form",
        #[cfg(feature = "server")]
        "geo",
        #[cfg(feature = "server")]
        "listings",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    _config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Form engine
    slices.push(features::form::init()?);

    // Geo directory
    slices.push(features::geo::init()?);

    // Listing catalog
    slices.push(features::listings::init()?);

    Ok(slices)
}
