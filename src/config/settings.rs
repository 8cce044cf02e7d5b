//! Application settings and paths.

use crate::cli::OutputFormat;
use crate::error::{ConfigError, ConfigResult};
use crate::types::KindId;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/nettypes)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories. Nothing is created on disk.
    pub fn resolve() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "nettypes", "nettypes")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Kind used when a command is given no `--kind`.
    pub default_kind: KindId,
    /// Default output format.
    pub output_format: OutputFormat,
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Style plain output with colour.
    pub color: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_kind: KindId::IpAddress,
            output_format: OutputFormat::Plain,
            log_filter: "warn".to_string(),
            color: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location. A missing file yields the
    /// defaults.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::resolve()?.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }
}
