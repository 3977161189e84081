//! # CLI Configuration
//!
//! Optional YAML file with defaults for output and batch behaviour.
//! Resolution order: `--config <path>`, then the `ABN_CONFIG` environment
//! variable, then built-in defaults. Command-line flags override values
//! from the file.
//!
//! ```yaml
//! format: json
//! fail_fast: true
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::output::OutputFormat;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ABN_CONFIG";

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format for results on stdout.
    pub format: OutputFormat,
    /// Stop a batch at the first invalid candidate.
    pub fail_fast: bool,
}

impl CliConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("invalid ABN CLI configuration")
    }

    /// Read and parse the config file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in {}", path.display()))
    }
}

/// Pick the config path: an explicit path wins over the environment.
pub fn resolve_config_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Load the effective configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<CliConfig> {
    match resolve_config_path(explicit, std::env::var_os(CONFIG_ENV)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            CliConfig::from_file(&path)
        }
        None => {
            tracing::debug!("no config file; using defaults");
            Ok(CliConfig::default())
        }
    }
}
