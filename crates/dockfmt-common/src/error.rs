//! Unified error types for the dockfmt workspace.
//!
//! Per-line grammar violations are not errors in this sense: the codec
//! reports them as data inside a validation report. This enum covers the
//! failures around the codec, such as unreadable input or bad settings.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DockfmtError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A list type tag did not name a known format.
    #[error("unknown list type: {tag}")]
    UnknownKind {
        /// The tag that failed to match.
        tag: String,
    },

    /// A token is not part of a fixed vocabulary such as protocols or modes.
    #[error("unknown {kind}: {token}")]
    UnknownToken {
        /// Name of the vocabulary that was searched.
        kind: &'static str,
        /// The token that failed to match.
        token: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DockfmtError>;
