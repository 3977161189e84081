//! # abn-core: Australian Business Number Validation
//!
//! Validates ABN candidates against the ATO weighted modulo-89 checksum
//! after normalizing away spaces and hyphens.
//!
//! ## Entry Points
//!
//! - [`validate`]: the boolean contract used by onboarding services.
//!   Every malformed input yields `false`; nothing panics.
//! - [`check`]: the same rules, returning an [`AbnError`] that says whether
//!   the candidate failed on format or on checksum.
//! - [`Abn`]: a newtype that can only hold a verified number. Supports
//!   validating `Deserialize`, `FromStr`, and [`Abn::from_body`] for
//!   deriving check digits.
//!
//! ```
//! assert!(abn_core::validate("51 824 753 556"));
//! assert!(!abn_core::validate("12 345 678 999"));
//!
//! let abn = abn_core::Abn::from_body("824-753-556").unwrap();
//! assert_eq!(abn.to_string(), "51 824 753 556");
//! ```
//!
//! ## Crate Policy
//!
//! - Pure functions only: no I/O, no logging, no global state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod abn;
pub mod checksum;
pub mod error;
pub mod normalize;

pub use abn::{check, validate, Abn};
pub use checksum::{ABN_LENGTH, BODY_LENGTH, MODULUS, WEIGHTS};
pub use error::{AbnError, FormatIssue};
pub use normalize::normalize;
