//! `dockfmt parse` — print the entries found in list text.

use std::path::PathBuf;

use clap::Args;
use dockfmt_codec::{EnvCodec, ListCodec, PortCodec, VolumeCodec};
use dockfmt_common::types::ListKind;

use crate::output::DataFormat;

/// Arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// List type: env, port, or volume.
    pub kind: ListKind,

    /// Input file; stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Output encoding.
    #[arg(short, long, value_enum, default_value_t = DataFormat::Json)]
    pub output: DataFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Executes the `parse` command.
///
/// Lines that cannot be read are dropped; use `validate` to see why.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the entries cannot be encoded.
pub fn execute(args: &ParseArgs) -> anyhow::Result<()> {
    let text = crate::input::read_input(args.file.as_deref())?;
    tracing::info!(kind = %args.kind, "parsing list");
    let rendered = match args.kind {
        ListKind::Env => render::<EnvCodec>(&text, args),
        ListKind::Port => render::<PortCodec>(&text, args),
        ListKind::Volume => render::<VolumeCodec>(&text, args),
    }?;
    println!("{rendered}");
    Ok(())
}

fn render<C: ListCodec>(text: &str, args: &ParseArgs) -> anyhow::Result<String> {
    args.output.render(&C::parse(text), args.pretty)
}
