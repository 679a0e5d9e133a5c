use phub_derive::phub_error;
use std::borrow::Cow;

#[phub_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn phub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/phub_error_pass.rs");
}

#[test]
fn source_variant_converts_and_takes_context() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: DemoError = io.into();
    assert!(matches!(err, DemoError::Io { context: None, .. }));

    let res: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    let err = res.context("reading seed file").unwrap_err();
    match err {
        DemoError::Io { context, .. } => assert_eq!(context.as_deref(), Some("reading seed file")),
        DemoError::Internal { .. } => panic!("expected Io variant"),
    }
}

#[test]
fn internal_variant_converts_from_strings() {
    let err: DemoError = "static fault".into();
    assert!(matches!(err, DemoError::Internal { context: None, .. }));

    let err: DemoError = String::from("owned fault").into();
    let rendered = err.to_string();
    assert!(rendered.contains("owned fault"));
}

#[test]
fn context_is_rendered_in_parentheses() {
    let res: Result<(), DemoError> =
        Err(DemoError::Internal { message: "boom".into(), context: None });
    let err = res.context("while seeding districts").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (while seeding districts): boom");
}
