//! # Format Subcommand
//!
//! Prints the canonical and grouped forms of a single ABN. Useful for
//! normalizing values before they are stored elsewhere.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use abn_core::Abn;

use crate::config::CliConfig;
use crate::output::{write_json, write_verdict, OutputFormat, Verdict};

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// ABN to normalize.
    pub candidate: String,
}

#[derive(Debug, Serialize)]
struct FormattedAbn<'a> {
    input: &'a str,
    canonical: &'a str,
    formatted: String,
    check_digits: &'a str,
    body: &'a str,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = format_one(&args.candidate, config.format, &mut out)?;
    out.flush()?;
    Ok(code)
}

/// Write the forms of `candidate`, or its rejection. Returns the exit code.
pub fn format_one(candidate: &str, format: OutputFormat, out: &mut impl Write) -> Result<u8> {
    let abn = match Abn::new(candidate) {
        Ok(abn) => abn,
        Err(err) => {
            tracing::debug!(error = %err, "cannot format invalid ABN");
            write_verdict(out, &Verdict::from_result(candidate, &Err(err)), format)?;
            return Ok(1);
        }
    };

    match format {
        OutputFormat::Text => {
            writeln!(out, "canonical: {}", abn.as_str())?;
            writeln!(out, "formatted: {}", abn.formatted())?;
        }
        OutputFormat::Json => write_json(
            out,
            &FormattedAbn {
                input: candidate,
                canonical: abn.as_str(),
                formatted: abn.formatted(),
                check_digits: abn.check_digits(),
                body: abn.body(),
            },
        )?,
    }
    Ok(0)
}
