//! CLI command implementations for Tactician.

pub(crate) mod batch;
pub(crate) mod decide;
pub(crate) mod play;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::path::Path;

use tactician::TacticsConfig;
use tactician::protocol::ProtocolError;

/// Output format for the `decide` and `batch` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ProtocolError> for CliError {
    fn from(e: ProtocolError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Load thresholds from an optional JSON file and apply a seed override.
pub(crate) fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<TacticsConfig, CliError> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                CliError::new(format!("Failed to read {}: {e}", path.display()))
            })?;
            TacticsConfig::from_json(&json).map_err(|e| {
                CliError::new(format!("Invalid config {}: {e}", path.display()))
            })?
        }
        None => TacticsConfig::default(),
    };
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}
