use crate::SAFE_ALPHABET;
use std::borrow::Cow;

#[phub_derive::phub_error]
pub enum ResourceGuardError {
    #[error("Resource validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Longest ID the guard accepts. `safe_nanoid!` produces 12 characters by
/// default, but callers may mint longer ones.
const MAX_ID_LEN: usize = 64;

/// Utilities for safe resource handling and ID validation.
#[derive(Debug)]
pub struct ResourceGuard;

impl ResourceGuard {
    /// Validates an opaque resource ID before it touches a lookup.
    ///
    /// IDs are minted with `safe_nanoid!`, so anything outside the safe
    /// alphabet (or an empty/oversized string) is garbage from the caller:
    /// a mistyped URL, a scraped path, or an injection attempt.
    ///
    /// # Arguments
    /// * `id` - The ID to verify (e.g., "qXp4WnR8kTzv")
    /// * `entity` - The entity name used in error messages (e.g., "listing")
    ///
    /// # Errors
    /// Returns an error if the ID is empty, too long, or contains characters
    /// outside the safe nanoid alphabet.
    pub fn verify<I, E>(id: I, entity: E) -> Result<String, ResourceGuardError>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        let id_ref = id.as_ref();
        let entity_ref = entity.as_ref();

        if id_ref.is_empty() || id_ref.len() > MAX_ID_LEN {
            return Err(ResourceGuardError::Validation {
                message: format!("Invalid {entity_ref} id length").into(),
                context: Some("ID length check".into()),
            });
        }

        if let Some(bad) = id_ref.chars().find(|c| !SAFE_ALPHABET.contains(c)) {
            return Err(ResourceGuardError::Validation {
                message: format!("Invalid character {bad:?} in {entity_ref} id").into(),
                context: Some("ID alphabet check".into()),
            });
        }

        Ok(id_ref.to_owned())
    }
}
