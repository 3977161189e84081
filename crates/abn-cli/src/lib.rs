//! # abn-cli: Command-Line Interface for ABN Validation
//!
//! Provides the `abn` binary over [`abn_core`].
//!
//! ## Subcommands
//!
//! - `abn validate`: check candidates from arguments, a file, or stdin.
//! - `abn format`: print the canonical and grouped forms of one ABN.
//! - `abn derive`: compute check digits for a 9-digit body.
//!
//! ```bash
//! abn validate "51 824 753 556" 53-004-085-616
//! abn --format json validate --file partners.txt
//! abn derive 824753556
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here return exit codes.
//! - Handlers delegate to `abn-core`. No validation logic here.
//! - Results go to stdout, logs go to stderr.

pub mod config;
pub mod derivation;
pub mod formatting;
pub mod output;
pub mod validate;

pub use config::{load_config, CliConfig};
pub use output::{OutputFormat, Verdict};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<derivation::DeriveArgs>();
        let _ = std::any::type_name::<formatting::FormatArgs>();
        let _ = std::any::type_name::<validate::ValidateArgs>();
        let _ = std::any::type_name::<CliConfig>();
        let _ = std::any::type_name::<Verdict>();
    }
}
