use std::borrow::Cow;

/// Form slice error type.
#[phub_derive::phub_error]
pub enum FormError {
    #[error("Form error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
