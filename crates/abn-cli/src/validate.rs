//! # Validate Subcommand
//!
//! Batch ABN validation. Candidates come from positional arguments, a
//! file (`--file`), and stdin (`--stdin`), in that order. In files and on
//! stdin, blank lines and lines starting with `#` are skipped.
//!
//! Exit codes: `0` when every candidate is valid, `1` when any is invalid,
//! `2` when there was nothing to check.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::CliConfig;
use crate::output::{write_verdict, OutputFormat, Verdict};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// ABN candidates to check. Quote values containing spaces.
    pub candidates: Vec<String>,

    /// Read additional candidates from a file, one per line.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read additional candidates from stdin, one per line.
    #[arg(long)]
    pub stdin: bool,

    /// Stop at the first invalid candidate.
    #[arg(long)]
    pub fail_fast: bool,
}

/// Counts from one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Candidates examined.
    pub checked: usize,
    /// Candidates that passed.
    pub valid: usize,
    /// Candidates that failed.
    pub invalid: usize,
}

impl BatchSummary {
    /// Exit code for this batch.
    pub fn exit_code(&self) -> u8 {
        if self.checked == 0 {
            2
        } else if self.invalid > 0 {
            1
        } else {
            0
        }
    }
}

/// Execute the validate subcommand against the process stdin and stdout.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let stdin = std::io::stdin();
    let candidates = collect_candidates(args, stdin.lock())?;
    if candidates.is_empty() {
        tracing::warn!("no ABN candidates supplied; pass arguments, --file, or --stdin");
        return Ok(2);
    }

    let fail_fast = args.fail_fast || config.fail_fast;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = validate_batch(&candidates, config.format, fail_fast, &mut out)?;
    out.flush()?;

    tracing::info!(
        checked = summary.checked,
        valid = summary.valid,
        invalid = summary.invalid,
        "validation complete"
    );
    Ok(summary.exit_code())
}

/// Gather candidates from arguments, `--file`, and (if requested) `stdin`.
pub fn collect_candidates(args: &ValidateArgs, stdin: impl BufRead) -> Result<Vec<String>> {
    let mut candidates = args.candidates.clone();

    if let Some(path) = &args.file {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open candidate file {}", path.display()))?;
        let from_file = read_candidates(BufReader::new(file))
            .with_context(|| format!("failed to read candidate file {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = from_file.len(), "read candidates from file");
        candidates.extend(from_file);
    }

    if args.stdin {
        let from_stdin = read_candidates(stdin).context("failed to read candidates from stdin")?;
        tracing::debug!(count = from_stdin.len(), "read candidates from stdin");
        candidates.extend(from_stdin);
    }

    Ok(candidates)
}

/// Read one candidate per line, skipping blanks and `#` comments.
pub fn read_candidates(reader: impl BufRead) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(trimmed.to_string());
    }
    Ok(out)
}

/// Validate each candidate and write one result line per candidate.
pub fn validate_batch(
    candidates: &[String],
    format: OutputFormat,
    fail_fast: bool,
    out: &mut impl Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for candidate in candidates {
        let verdict = Verdict::check(candidate);
        summary.checked += 1;
        if verdict.valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
            tracing::debug!(input = %candidate, kind = ?verdict.kind, "rejected");
        }
        write_verdict(out, &verdict, format)?;

        if fail_fast && !verdict.valid {
            tracing::info!(remaining = candidates.len() - summary.checked, "stopping at first invalid candidate");
            break;
        }
    }
    Ok(summary)
}
