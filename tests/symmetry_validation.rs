use oxo::tictactoe::{Symmetry, codec};

/// Every raw 9-digit configuration, legal or not: 3^9 keys.
fn enumerate_keys() -> Vec<String> {
    let mut keys = Vec::with_capacity(3usize.pow(9));
    for index in 0..3usize.pow(9) {
        let mut n = index;
        let mut digits = ['0'; 9];
        for slot in (0..9).rev() {
            digits[slot] = match n % 3 {
                0 => '0',
                1 => '1',
                _ => '2',
            };
            n /= 3;
        }
        keys.push(digits.iter().collect());
    }
    keys
}

#[test]
fn verify_codec_roundtrip_over_all_configurations() {
    for key in enumerate_keys() {
        let board = codec::decode(&key).expect("nine digits decode");
        assert_eq!(board.encode(), key);
    }
}

#[test]
fn verify_canonical_key_is_class_invariant() {
    for key in enumerate_keys() {
        let board = codec::decode(&key).expect("nine digits decode");
        let canonical = board.canonical_key();
        for symmetry in Symmetry::all() {
            assert_eq!(
                board.transform(symmetry).canonical_key(),
                canonical,
                "Class of {key} splits under {symmetry:?}"
            );
        }
    }
}

#[test]
fn verify_canonical_key_is_idempotent() {
    for key in enumerate_keys() {
        let board = codec::decode(&key).expect("nine digits decode");
        let canonical = board.canonical_key();
        let reduced = codec::decode(canonical.as_str()).expect("canonical keys decode");
        assert_eq!(reduced.canonical_key(), canonical);
    }
}

#[test]
fn verify_canonical_key_is_the_minimum_encoding() {
    for key in enumerate_keys() {
        let board = codec::decode(&key).expect("nine digits decode");
        let minimum = Symmetry::all()
            .iter()
            .map(|&symmetry| board.transform(symmetry).encode())
            .min()
            .expect("eight symmetries");
        assert_eq!(board.canonical_key().as_str(), minimum);
    }
}
