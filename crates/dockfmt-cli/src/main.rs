//! # dockfmt — container list converter
//!
//! Converts Docker env, port, and volume settings between structured
//! entries and their one-per-line text form, and checks text before it is
//! submitted.

mod commands;
mod input;
mod logging;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.config());
    commands::execute(cli)
}
