//! # Weighted Modulo-89 Checksum
//!
//! The ATO check for an 11-digit ABN:
//!
//! 1. Subtract 1 from the leading digit.
//! 2. Multiply each digit by its weight from [`WEIGHTS`].
//! 3. Sum the products.
//! 4. The number is valid iff the sum is divisible by [`MODULUS`].
//!
//! The leading digit may be `0`, which makes its adjusted value `-1`, so
//! the sum is computed in signed arithmetic and reduced with
//! [`i32::rem_euclid`].

/// Number of digits in an ABN.
pub const ABN_LENGTH: usize = 11;

/// Number of digits in the body that follows the two check digits.
pub const BODY_LENGTH: usize = 9;

/// Positional weights, index 0 through 10.
pub const WEIGHTS: [i32; ABN_LENGTH] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Divisor applied to the weighted sum.
pub const MODULUS: i32 = 89;

/// Compute the weighted sum of an 11-digit sequence, with the leading
/// digit reduced by one.
pub fn weighted_sum(digits: &[u8; ABN_LENGTH]) -> i32 {
    digits
        .iter()
        .zip(WEIGHTS.iter())
        .enumerate()
        .map(|(pos, (&d, &w))| {
            let value = i32::from(d) - i32::from(pos == 0);
            value * w
        })
        .sum()
}

/// Remainder of the weighted sum modulo 89, always in `0..89`.
pub fn remainder(digits: &[u8; ABN_LENGTH]) -> u32 {
    // rem_euclid of a positive modulus is non-negative.
    weighted_sum(digits).rem_euclid(MODULUS) as u32
}

/// Derive the two leading check digits for a 9-digit body.
///
/// The first two positions carry weights 10 and 1, so a two-digit prefix
/// `p` contributes `p - 10` to the sum. Exactly one `p` in `10..=98`
/// cancels the body's contribution modulo 89.
pub fn check_digits_for(body: &[u8; BODY_LENGTH]) -> u8 {
    let body_sum: i32 = body
        .iter()
        .zip(WEIGHTS[2..].iter())
        .map(|(&d, &w)| i32::from(d) * w)
        .sum();
    let offset = (MODULUS - body_sum.rem_euclid(MODULUS)).rem_euclid(MODULUS);
    // offset is in 0..89, so the prefix is in 10..=98.
    (10 + offset) as u8
}
