//! # abn CLI entry point
//!
//! Parses command-line arguments, initializes logging, loads configuration,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use abn_cli::config::load_config;
use abn_cli::derivation::{run_derive, DeriveArgs};
use abn_cli::formatting::{run_format, FormatArgs};
use abn_cli::output::OutputFormat;
use abn_cli::validate::{run_validate, ValidateArgs};

/// ABN toolkit: validate, normalize, and derive Australian Business Numbers.
#[derive(Parser, Debug)]
#[command(name = "abn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (overrides ABN_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; overrides the configuration file.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more ABN candidates.
    Validate(ValidateArgs),

    /// Print the canonical and grouped forms of an ABN.
    Format(FormatArgs),

    /// Derive check digits for a 9-digit body.
    Derive(DeriveArgs),
}

/// Map `-v` count to a default filter directive.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("abn CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    tracing::debug!(?config, "effective configuration");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Format(args) => run_format(&args, &config),
        Commands::Derive(args) => run_derive(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
