//! # Error Types: Validation Failure Taxonomy
//!
//! Two failure classes exist. Both collapse to `false` at the boolean
//! [`crate::validate`] boundary; the distinction is kept for diagnostics
//! via [`crate::check`].
//!
//! - [`AbnError::InvalidFormat`]: the normalized candidate is not an
//!   11-digit string, or it is all zeros.
//! - [`AbnError::ChecksumFailure`]: the candidate is well-formed but its
//!   weighted sum is not divisible by 89.

use thiserror::Error;

/// Reason an ABN candidate was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbnError {
    /// Wrong length, non-digit characters, or all-zero digits after
    /// separators were stripped.
    #[error("invalid ABN format {input:?}: {reason}")]
    InvalidFormat {
        /// The candidate as supplied by the caller.
        input: String,
        /// Human-readable description of the format problem.
        reason: FormatIssue,
    },

    /// Well-formed digits whose weighted sum leaves a non-zero remainder.
    #[error("ABN checksum failed for {input:?}: weighted sum mod 89 = {remainder}")]
    ChecksumFailure {
        /// The candidate as supplied by the caller.
        input: String,
        /// Weighted sum modulo 89 (always in `1..89`).
        remainder: u32,
    },
}

/// Specific format problem behind an [`AbnError::InvalidFormat`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// No characters remained after stripping separators.
    #[error("empty after removing separators")]
    Empty,

    /// Digit count differs from the expected length.
    #[error("expected {expected} digits, got {actual}")]
    WrongLength {
        /// Required number of characters.
        expected: usize,
        /// Number of characters present after normalization.
        actual: usize,
    },

    /// A character other than an ASCII digit was found.
    #[error("non-digit character {0:?}")]
    NonDigit(char),

    /// Every digit is zero. Never issued.
    #[error("all digits are zero")]
    AllZeros,
}

impl AbnError {
    /// Stable, machine-readable tag for this failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::ChecksumFailure { .. } => "checksum_failure",
        }
    }

    /// The candidate string that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } | Self::ChecksumFailure { input, .. } => input,
        }
    }
}
