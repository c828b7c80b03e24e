//! `dockfmt format` — render an entry document as list text.

use std::path::PathBuf;

use clap::Args;
use dockfmt_codec::{EnvCodec, ListCodec, PortCodec, VolumeCodec};
use dockfmt_common::types::ListKind;

use crate::output::DataFormat;

/// Arguments for the `format` command.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// List type: env, port, or volume.
    pub kind: ListKind,

    /// Entry document; stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Encoding of the entry document.
    #[arg(short, long, value_enum, default_value_t = DataFormat::Json)]
    pub input: DataFormat,
}

/// Executes the `format` command.
///
/// # Errors
///
/// Returns an error if the document cannot be read or does not hold a list
/// of entries of the requested type.
pub fn execute(args: &FormatArgs) -> anyhow::Result<()> {
    let source = crate::input::read_input(args.file.as_deref())?;
    tracing::info!(kind = %args.kind, "formatting entries");
    let text = match args.kind {
        ListKind::Env => format_with::<EnvCodec>(&source, args.input),
        ListKind::Port => format_with::<PortCodec>(&source, args.input),
        ListKind::Volume => format_with::<VolumeCodec>(&source, args.input),
    }?;
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

fn format_with<C: ListCodec>(source: &str, input: DataFormat) -> anyhow::Result<String> {
    let entries: Vec<C::Entry> = input.decode(source)?;
    Ok(C::format(&entries))
}
