//! Convenience re-exports for slice and application code.

pub use crate::safe_nanoid;
pub use crate::security::resource::{ResourceGuard, ResourceGuardError};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
