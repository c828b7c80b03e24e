//! Runtime configuration for the dockfmt tools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DockfmtError;

/// Root configuration shared by the CLI and embedding hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockfmtConfig {
    /// Output format for log records.
    pub log_format: LogFormat,
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for DockfmtConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_filter: crate::constants::DEFAULT_LOG_FILTER.into(),
        }
    }
}

/// How log records are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = DockfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(DockfmtError::Config {
                message: format!("unknown log format: {s} (use text or json)"),
            }),
        }
    }
}
