use phub_kernel::{SAFE_ALPHABET, safe_nanoid};

#[test]
fn default_length_is_twelve() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);
}

#[test]
fn custom_length_is_respected() {
    let id = safe_nanoid!(21);
    assert_eq!(id.len(), 21);
}

#[test]
fn ids_use_only_the_safe_alphabet() {
    for _ in 0..64 {
        let id = safe_nanoid!();
        assert!(
            id.chars().all(|c| SAFE_ALPHABET.contains(&c)),
            "unexpected character in id {id}"
        );
    }
}

#[test]
fn ids_are_unique_enough() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(safe_nanoid!()), "duplicate id generated");
    }
}
