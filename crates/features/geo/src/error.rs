use std::borrow::Cow;

/// Geo slice error type.
#[phub_derive::phub_error]
pub enum GeoError {
    #[error("Geo error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
