//! # Derive Subcommand
//!
//! Computes the two leading check digits for a 9-digit ABN body and
//! prints the resulting number.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use abn_core::Abn;

use crate::config::CliConfig;
use crate::output::{write_json, write_verdict, OutputFormat, Verdict};

/// Arguments for the derive subcommand.
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Nine-digit body (spaces and hyphens allowed).
    pub body: String,
}

#[derive(Debug, Serialize)]
struct DerivedAbn<'a> {
    body: &'a str,
    check_digits: &'a str,
    abn: &'a str,
    formatted: String,
}

/// Execute the derive subcommand.
pub fn run_derive(args: &DeriveArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = derive_one(&args.body, config.format, &mut out)?;
    out.flush()?;
    Ok(code)
}

/// Write the ABN derived from `body`, or its rejection. Returns the exit code.
pub fn derive_one(body: &str, format: OutputFormat, out: &mut impl Write) -> Result<u8> {
    let abn = match Abn::from_body(body) {
        Ok(abn) => abn,
        Err(err) => {
            tracing::debug!(error = %err, "cannot derive check digits");
            write_verdict(out, &Verdict::from_result(body, &Err(err)), format)?;
            return Ok(1);
        }
    };
    tracing::debug!(check_digits = abn.check_digits(), "derived check digits");

    match format {
        OutputFormat::Text => writeln!(out, "{}", abn.formatted())?,
        OutputFormat::Json => write_json(
            out,
            &DerivedAbn {
                body: abn.body(),
                check_digits: abn.check_digits(),
                abn: abn.as_str(),
                formatted: abn.formatted(),
            },
        )?,
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_text() {
        let mut out = Vec::new();
        assert_eq!(derive_one("824 753 556", OutputFormat::Text, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "51 824 753 556\n");
    }

    #[test]
    fn derives_json() {
        let mut out = Vec::new();
        derive_one("004085616", OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["check_digits"], "53");
        assert_eq!(value["abn"], "53004085616");
        assert_eq!(value["body"], "004085616");
    }

    #[test]
    fn rejects_short_body() {
        let mut out = Vec::new();
        assert_eq!(derive_one("12345", OutputFormat::Json, &mut out).unwrap(), 1);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["reason"], "expected 9 digits, got 5");
    }
}
