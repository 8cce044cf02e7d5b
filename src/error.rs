//! Error types for nettypes.
//!
//! Uses `thiserror` for ergonomic error definitions. Parse errors live next
//! to their grammars in [`crate::parse`]; user-facing validation problems
//! are [`crate::framework::Diagnostics`], not errors.

use crate::framework::WireType;
use std::path::PathBuf;
use thiserror::Error;

/// Failure decoding a host wire value into a typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("can't unmarshal {0} into string, expected string")]
    NotAString(WireType),
}

/// Errors loading application settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid configuration format: {0}")]
    InvalidFormat(String),
}

/// Errors surfaced by the command-line front end. Invalid values are not
/// errors here; commands report them and exit unsuccessfully.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
