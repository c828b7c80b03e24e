//! `dockfmt validate` — report every invalid line in list text.

use std::path::PathBuf;

use clap::Args;
use dockfmt_codec::{EnvCodec, ListCodec, PortCodec, ValidationReport, VolumeCodec};
use dockfmt_common::types::ListKind;

use crate::output::DataFormat;

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// List type: env, port, or volume.
    pub kind: ListKind,

    /// Input file; stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Output encoding for the report.
    #[arg(short, long, value_enum, default_value_t = DataFormat::Json)]
    pub output: DataFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Executes the `validate` command.
///
/// The report is always printed. The command fails when any line is invalid,
/// so scripts can gate on the exit status.
///
/// # Errors
///
/// Returns an error if the input cannot be read, or if it contains invalid lines.
pub fn execute(args: &ValidateArgs) -> anyhow::Result<()> {
    let text = crate::input::read_input(args.file.as_deref())?;
    let report = validate(args.kind, &text);
    tracing::info!(
        kind = %args.kind,
        valid = report.count,
        errors = report.errors.len(),
        "validated list"
    );
    println!("{}", args.output.render(&report, args.pretty)?);
    ensure_valid(args.kind, &report)
}

/// Turns an invalid report into a command error.
fn ensure_valid(kind: ListKind, report: &ValidationReport) -> anyhow::Result<()> {
    if !report.valid {
        anyhow::bail!("{} invalid line(s) in {kind} list", report.errors.len());
    }
    Ok(())
}

fn validate(kind: ListKind, text: &str) -> ValidationReport {
    match kind {
        ListKind::Env => EnvCodec::validate(text),
        ListKind::Port => PortCodec::validate(text),
        ListKind::Volume => VolumeCodec::validate(text),
    }
}
