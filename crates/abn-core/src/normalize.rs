//! # Normalization
//!
//! ABNs are written in several ways: `51 824 753 556`, `51-824-753-556`,
//! or `51824753556`. Formatting is not significant, so every entry point
//! strips spaces and hyphens before looking at the digits.

use crate::error::FormatIssue;

/// Separator characters removed during normalization.
pub const SEPARATORS: [char; 2] = [' ', '-'];

/// Remove all separator characters from `candidate`.
///
/// Only `' '` and `'-'` are removed. Every other character is kept, so
/// tabs, letters and dots still fail the digit check that follows.
/// Applying this twice yields the same result as applying it once.
pub fn normalize(candidate: &str) -> String {
    candidate.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Parse a normalized string into exactly `N` decimal digits.
pub(crate) fn parse_digits<const N: usize>(normalized: &str) -> Result<[u8; N], FormatIssue> {
    if normalized.is_empty() {
        return Err(FormatIssue::Empty);
    }

    if let Some(bad) = normalized.chars().find(|c| !c.is_ascii_digit()) {
        return Err(FormatIssue::NonDigit(bad));
    }

    // All ASCII digits past this point, so byte length == char count.
    if normalized.len() != N {
        return Err(FormatIssue::WrongLength {
            expected: N,
            actual: normalized.len(),
        });
    }

    let mut digits = [0u8; N];
    for (slot, b) in digits.iter_mut().zip(normalized.bytes()) {
        *slot = b - b'0';
    }

    if digits.iter().all(|d| *d == 0) {
        return Err(FormatIssue::AllZeros);
    }

    Ok(digits)
}
