//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `nettypes validate <value>...` - Validate values of one kind
//! - `nettypes compare <current> <new>` - Semantic equality of two values
//! - `nettypes inspect <value>` - Parse a value and show its structure
//! - `nettypes contains <prefix> <address>` - Prefix membership
//! - `nettypes kinds` - List supported kinds

mod compare;
mod contains;
mod inspect;
mod validate;

pub use compare::CompareCommand;
pub use contains::ContainsCommand;
pub use inspect::InspectCommand;
pub use validate::ValidateCommand;

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output::{self, KindsReport, Report};
use crate::types::KindId;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// nettypes - Validate and compare network identifier strings.
///
/// Checks IPv4/IPv6 addresses, CIDR prefixes and MAC addresses with the
/// same rules and diagnostics the library types report to their host.
#[derive(Parser, Debug)]
#[command(name = "nettypes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate and compare network identifier strings", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more values
    #[command(alias = "v")]
    Validate(ValidateCommand),

    /// Check whether two values are semantically equal
    #[command(alias = "c")]
    Compare(CompareCommand),

    /// Parse a value and show its structured form
    #[command(alias = "i")]
    Inspect(InspectCommand),

    /// Test whether a prefix contains an address
    Contains(ContainsCommand),

    /// List supported kinds
    Kinds,
}

impl Commands {
    /// Run the command. Returns whether it succeeded, which the binary maps
    /// to its exit status.
    pub fn execute(&self, ctx: &Context) -> CliResult<bool> {
        match self {
            Self::Validate(cmd) => cmd.execute(ctx),
            Self::Compare(cmd) => cmd.execute(ctx),
            Self::Inspect(cmd) => cmd.execute(ctx),
            Self::Contains(cmd) => cmd.execute(ctx),
            Self::Kinds => {
                ctx.emit(&KindsReport::all())?;
                Ok(true)
            }
        }
    }
}

/// Settings and global flags shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: AppSettings,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    pub fn new(cli: &Cli, settings: AppSettings) -> Self {
        Self {
            format: cli.output.unwrap_or(settings.output_format),
            quiet: cli.quiet,
            settings,
        }
    }

    /// The kind to use when a command was not given one.
    pub fn kind_or_default(&self, kind: Option<KindId>) -> KindId {
        kind.unwrap_or(self.settings.default_kind)
    }

    /// Print a report unless running quietly.
    pub fn emit<R: Report>(&self, report: &R) -> CliResult<()> {
        if !self.quiet {
            output::print_report(report, self.format)?;
        }
        Ok(())
    }
}

/// Output format for results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::parse_from(["nettypes", "validate", "-k", "ipv4-prefix", "10.0.0.0/8", "::/0"]);
        match cli.command {
            Commands::Validate(cmd) => {
                assert_eq!(cmd.kind, Some(KindId::Ipv4Prefix));
                assert_eq!(cmd.values, vec!["10.0.0.0/8", "::/0"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_context_prefers_flag_over_settings() {
        let cli = Cli::parse_from(["nettypes", "--output", "csv", "kinds"]);
        let settings = AppSettings {
            output_format: OutputFormat::Json,
            ..AppSettings::default()
        };
        let ctx = Context::new(&cli, settings.clone());
        assert_eq!(ctx.format, OutputFormat::Csv);

        let cli = Cli::parse_from(["nettypes", "kinds"]);
        let ctx = Context::new(&cli, settings);
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.kind_or_default(None), KindId::IpAddress);
        assert_eq!(ctx.kind_or_default(Some(KindId::MacAddress)), KindId::MacAddress);
        assert!(!ctx.quiet);

        let cli = Cli::parse_from(["nettypes", "--quiet", "kinds"]);
        assert!(Context::new(&cli, AppSettings::default()).quiet);
    }
}
