use phub_kernel::safe_nanoid;
use phub_kernel::security::resource::{ResourceGuard, ResourceGuardError};

#[test]
fn minted_ids_pass_verification() {
    let id = safe_nanoid!();
    assert_eq!(ResourceGuard::verify(&id, "listing").unwrap(), id);

    let long = safe_nanoid!(32);
    assert_eq!(ResourceGuard::verify(&long, "listing").unwrap(), long);
}

#[test]
fn garbage_ids_are_rejected() {
    for bad in ["", "../secrets", "listing:123", "qXp4WnR8kT0v", "a b c"] {
        let err = ResourceGuard::verify(bad, "listing");
        assert!(
            matches!(err, Err(ResourceGuardError::Validation { .. })),
            "expected rejection for {bad:?}"
        );
    }
}

#[test]
fn oversized_ids_are_rejected() {
    let oversized = "a".repeat(65);
    assert!(ResourceGuard::verify(oversized, "listing").is_err());
}
