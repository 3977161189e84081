//! # Australian Business Number
//!
//! The validated [`Abn`] newtype and the free functions [`check`] and
//! [`validate`] that sit in front of it.
//!
//! ## Validation
//!
//! A candidate is accepted when, after stripping spaces and hyphens:
//!
//! - it is exactly 11 ASCII digits,
//! - it is not all zeros,
//! - its weighted sum is divisible by 89 (see [`crate::checksum`]).
//!
//! The canonical storage format is the bare 11 digits. [`Abn::formatted`]
//! renders the conventional `NN NNN NNN NNN` grouping.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::{self, ABN_LENGTH, BODY_LENGTH};
use crate::error::AbnError;
use crate::normalize::{normalize, parse_digits};

/// Implements `Deserialize` for string newtypes that must validate their
/// contents: deserializes a plain `String`, then routes it through `new()`
/// so invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A checksum-verified Australian Business Number.
///
/// Can only be obtained through [`Abn::new`], [`Abn::from_body`], [`check`],
/// `FromStr`, or validating deserialization. Serializes as the canonical
/// 11-digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Abn(String);

impl_validating_deserialize!(Abn);

impl Abn {
    /// Create an ABN from a string, validating format and checksum.
    ///
    /// Accepts `"51824753556"`, `"51 824 753 556"` and `"51-824-753-556"`.
    ///
    /// # Errors
    ///
    /// Returns [`AbnError::InvalidFormat`] or [`AbnError::ChecksumFailure`].
    pub fn new(value: impl Into<String>) -> Result<Self, AbnError> {
        check(&value.into())
    }

    /// Build a full ABN from its 9-digit body by deriving the two leading
    /// check digits.
    ///
    /// Spaces and hyphens in `body` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AbnError::InvalidFormat`] if the body is not 9 digits or
    /// is all zeros.
    pub fn from_body(body: &str) -> Result<Self, AbnError> {
        let normalized = normalize(body);
        let digits = parse_digits::<BODY_LENGTH>(&normalized).map_err(|reason| {
            AbnError::InvalidFormat {
                input: body.to_string(),
                reason,
            }
        })?;
        let prefix = checksum::check_digits_for(&digits);
        Ok(Self(format!("{prefix:02}{normalized}")))
    }

    /// Access the ABN in canonical 11-digit format.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the ABN grouped as `NN NNN NNN NNN`.
    pub fn formatted(&self) -> String {
        format!(
            "{} {} {} {}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..]
        )
    }

    /// The two leading check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[..2]
    }

    /// The nine digits following the check digits.
    pub fn body(&self) -> &str {
        &self.0[2..]
    }

    /// Consume the ABN and return the canonical string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Abn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl FromStr for Abn {
    type Err = AbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check(s)
    }
}

impl AsRef<str> for Abn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate `candidate` and report why it failed.
///
/// # Errors
///
/// Returns [`AbnError::InvalidFormat`] when the normalized candidate is not
/// 11 digits or is all zeros, and [`AbnError::ChecksumFailure`] when the
/// weighted sum is not divisible by 89.
pub fn check(candidate: &str) -> Result<Abn, AbnError> {
    let normalized = normalize(candidate);
    let digits = parse_digits::<ABN_LENGTH>(&normalized).map_err(|reason| {
        AbnError::InvalidFormat {
            input: candidate.to_string(),
            reason,
        }
    })?;

    match checksum::remainder(&digits) {
        0 => Ok(Abn(normalized)),
        remainder => Err(AbnError::ChecksumFailure {
            input: candidate.to_string(),
            remainder,
        }),
    }
}

/// Return `true` iff `candidate` is a valid ABN.
///
/// Never panics; every malformed input is simply `false`.
pub fn validate(candidate: &str) -> bool {
    check(candidate).is_ok()
}
