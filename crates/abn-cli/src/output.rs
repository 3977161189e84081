//! # Output Rendering
//!
//! Every subcommand reports per-candidate results through [`Verdict`], so
//! text and JSON output stay consistent. JSON mode writes one object per
//! line to keep stdout streamable.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use abn_core::{Abn, AbnError};

/// Output format for results written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Outcome of validating a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Candidate exactly as supplied.
    pub input: String,
    /// Whether the candidate is a valid ABN.
    pub valid: bool,
    /// Canonical 11-digit form, present when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abn: Option<String>,
    /// Grouped `NN NNN NNN NNN` form, present when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Failure class tag, present when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Failure description, present when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Verdict {
    /// Build a verdict from the result of [`abn_core::check`].
    pub fn from_result(input: &str, result: &Result<Abn, AbnError>) -> Self {
        match result {
            Ok(abn) => Self {
                input: input.to_string(),
                valid: true,
                abn: Some(abn.as_str().to_string()),
                formatted: Some(abn.formatted()),
                kind: None,
                reason: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                valid: false,
                abn: None,
                formatted: None,
                kind: Some(err.kind()),
                reason: Some(describe(err)),
            },
        }
    }

    /// Check `input` and wrap the outcome.
    pub fn check(input: &str) -> Self {
        Self::from_result(input, &abn_core::check(input))
    }
}

/// Short failure description without repeating the input.
fn describe(err: &AbnError) -> String {
    match err {
        AbnError::InvalidFormat { reason, .. } => reason.to_string(),
        AbnError::ChecksumFailure { remainder, .. } => {
            format!("checksum failed (weighted sum mod 89 = {remainder})")
        }
    }
}

/// Render a verdict as a single line without trailing newline.
pub fn render(verdict: &Verdict, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(verdict)?),
        OutputFormat::Text => Ok(match (&verdict.formatted, &verdict.reason) {
            (Some(formatted), _) if verdict.valid => format!("VALID   {formatted}"),
            (_, Some(reason)) => format!("INVALID {:?}: {reason}", verdict.input),
            _ => format!("INVALID {:?}", verdict.input),
        }),
    }
}

/// Render a verdict and write it followed by a newline.
pub fn write_verdict(out: &mut impl Write, verdict: &Verdict, format: OutputFormat) -> Result<()> {
    writeln!(out, "{}", render(verdict, format)?)?;
    Ok(())
}

/// Write an arbitrary serializable value as one JSON line.
pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_verdict_fields() {
        let v = Verdict::check("51-824-753-556");
        assert!(v.valid);
        assert_eq!(v.abn.as_deref(), Some("51824753556"));
        assert_eq!(v.formatted.as_deref(), Some("51 824 753 556"));
        assert!(v.kind.is_none());
        assert!(v.reason.is_none());
    }

    #[test]
    fn invalid_verdict_fields() {
        let v = Verdict::check("12 345 678 999");
        assert!(!v.valid);
        assert!(v.abn.is_none());
        assert_eq!(v.kind, Some("checksum_failure"));
        assert_eq!(
            v.reason.as_deref(),
            Some("checksum failed (weighted sum mod 89 = 48)")
        );

        let v = Verdict::check("1234");
        assert_eq!(v.kind, Some("invalid_format"));
        assert_eq!(v.reason.as_deref(), Some("expected 11 digits, got 4"));
    }

    #[test]
    fn text_rendering() {
        let ok = render(&Verdict::check("51824753556"), OutputFormat::Text).unwrap();
        assert_eq!(ok, "VALID   51 824 753 556");

        let bad = render(&Verdict::check("00000000000"), OutputFormat::Text).unwrap();
        assert_eq!(bad, "INVALID \"00000000000\": all digits are zero");
    }

    #[test]
    fn json_rendering_omits_empty_fields() {
        let line = render(&Verdict::check("51 824 753 556"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], "51 824 753 556");
        assert_eq!(value["valid"], true);
        assert_eq!(value["abn"], "51824753556");
        assert!(value.get("reason").is_none());
        assert!(value.get("kind").is_none());

        let line = render(&Verdict::check("5182475355X"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["kind"], "invalid_format");
        assert!(value.get("abn").is_none());
    }

    #[test]
    fn write_verdict_appends_newline() {
        let mut buf = Vec::new();
        write_verdict(&mut buf, &Verdict::check("51824753556"), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "VALID   51 824 753 556\n");
    }

    #[test]
    fn output_format_deserializes_lowercase() {
        let f: OutputFormat = serde_yaml::from_str("json").unwrap();
        assert_eq!(f, OutputFormat::Json);
        assert!(serde_yaml::from_str::<OutputFormat>("JSON").is_err());
    }
}
