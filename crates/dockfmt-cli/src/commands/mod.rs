//! CLI command definitions and dispatch.

pub mod dispatch;
pub mod format;
pub mod parse;
pub mod validate;

use clap::{Parser, Subcommand};
use dockfmt_common::config::{DockfmtConfig, LogFormat};
use dockfmt_common::constants::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV, LOG_FORMAT_ENV};

/// dockfmt — convert and check container env, port, and volume lists.
#[derive(Parser, Debug)]
#[command(name = "dockfmt", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Log record format (text or json).
    #[arg(long, global = true, env = LOG_FORMAT_ENV, default_value = "text")]
    pub log_format: LogFormat,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, env = LOG_FILTER_ENV, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Cli {
    /// Builds the runtime configuration from global flags.
    pub fn config(&self) -> DockfmtConfig {
        DockfmtConfig {
            log_format: self.log_format,
            log_filter: self.log_filter.clone(),
        }
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read list text and print the entries it contains.
    Parse(parse::ParseArgs),
    /// Check list text and report every invalid line.
    Validate(validate::ValidateArgs),
    /// Turn an entry document back into list text.
    Format(format::FormatArgs),
    /// Serve one boundary request ({"action","type","data"}) as JSON.
    Dispatch(dispatch::DispatchArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Parse(args) => parse::execute(&args),
        Command::Validate(args) => validate::execute(&args),
        Command::Format(args) => format::execute(&args),
        Command::Dispatch(args) => dispatch::execute(&args),
    }
}
