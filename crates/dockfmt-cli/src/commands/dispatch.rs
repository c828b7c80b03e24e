//! `dockfmt dispatch` — serve a single boundary request.

use std::path::PathBuf;

use clap::Args;

/// Arguments for the `dispatch` command.
#[derive(Args, Debug)]
pub struct DispatchArgs {
    /// Request document; stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Executes the `dispatch` command.
///
/// The envelope is printed even when the request fails; only unreadable
/// input is reported as a command error.
///
/// # Errors
///
/// Returns an error if the request cannot be read.
pub fn execute(args: &DispatchArgs) -> anyhow::Result<()> {
    let request = crate::input::read_input(args.file.as_deref())?;
    println!("{}", dockfmt_dispatch::handle_request(&request));
    Ok(())
}
