//! Tracing subscriber setup.
//!
//! Logs go to stderr so that stdout carries only command output.

use dockfmt_common::config::{DockfmtConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(config: &DockfmtConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_ok() {
        tracing::debug!(format = %config.log_format, "logging initialized");
    }
}
