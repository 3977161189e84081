//! # ABN Test Vectors
//!
//! Hardcoded inputs exercised through the public API only, the way an
//! onboarding service consumes the crate.
//!
//! The valid vectors are ABNs in public use. The invalid vectors cover
//! each failure class.

use abn_core::{check, validate, Abn, AbnError, FormatIssue};

/// Issued ABNs in assorted formatting.
const VALID: &[&str] = &[
    "51 824 753 556",
    "51824753556",
    "51-824-753-556",
    "53 004 085 616",
    "53004085616",
    " 53 004 085 616 ",
    "33 051 775 556",
    "49 004 028 077",
];

/// Checksum failures: well-formed but not divisible by 89.
const BAD_CHECKSUM: &[&str] = &[
    "12 345 678 999",
    "12 345 678 901",
    "83 147 290 275",
    "51 824 753 555",
    "15 824 753 556",
];

/// Format failures: wrong length, stray characters, all zeros.
const BAD_FORMAT: &[&str] = &[
    "",
    " ",
    "-",
    "5182475355",
    "518247535566",
    "51 824 753 55a",
    "ABN51824753556",
    "51_824_753_556",
    "51.824.753.556",
    "51\t824\t753\t556",
    "00000000000",
    "00 000 000 000",
];

#[test]
fn valid_vectors_pass() {
    for v in VALID {
        assert!(validate(v), "expected valid: {v:?}");
    }
}

#[test]
fn checksum_vectors_fail_with_checksum_failure() {
    for v in BAD_CHECKSUM {
        assert!(!validate(v), "expected invalid: {v:?}");
        match check(v) {
            Err(AbnError::ChecksumFailure { remainder, .. }) => assert_ne!(remainder, 0),
            other => panic!("expected checksum failure for {v:?}, got {other:?}"),
        }
    }
}

#[test]
fn format_vectors_fail_with_invalid_format() {
    for v in BAD_FORMAT {
        assert!(!validate(v), "expected invalid: {v:?}");
        let err = check(v).unwrap_err();
        assert_eq!(err.kind(), "invalid_format", "{v:?}: {err}");
        assert_eq!(err.input(), *v);
    }
}

#[test]
fn all_zero_is_explicitly_rejected() {
    assert!(matches!(
        check("00000000000"),
        Err(AbnError::InvalidFormat {
            reason: FormatIssue::AllZeros,
            ..
        })
    ));
}

#[test]
fn spaced_hyphenated_and_bare_forms_agree() {
    assert_eq!(validate("51-824-753-556"), validate("51824753556"));
    assert_eq!(validate("51 824 753 556"), validate("51824753556"));
    assert_eq!(validate("12-345-678-901"), validate("12345678901"));
    assert_eq!(validate("12 345 678 999"), validate("12345678999"));
}

#[test]
fn valid_vectors_share_canonical_form_per_number() {
    let a = Abn::new(VALID[0]).unwrap();
    let b = Abn::new(VALID[1]).unwrap();
    let c = Abn::new(VALID[2]).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.formatted(), "51 824 753 556");
}

#[test]
fn derived_numbers_match_issued_numbers() {
    for v in VALID {
        let issued = Abn::new(*v).unwrap();
        let derived = Abn::from_body(issued.body()).unwrap();
        assert_eq!(issued, derived, "{v:?}");
    }
}

#[test]
fn validation_is_safe_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let v = VALID[i % VALID.len()];
                (0..1_000).all(|_| validate(v))
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
