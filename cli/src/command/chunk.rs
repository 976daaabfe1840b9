use crate::command::{
    Command,
    commons::{ChunkTypeArgs, read_file},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use libpngwalk::{Chunk, ChunkReader, SIGNATURE_LEN, read_signature};
use std::path::PathBuf;
use tabled::{builder::Builder as TableBuilder, settings::Style as TableStyle};

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub struct ChunkCommand {
    #[command(subcommand)]
    command: ChunkCommands,
}

impl Command for ChunkCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        match self.command {
            ChunkCommands::List(cmd) => cmd.execute(),
        }
    }
}

#[derive(Subcommand, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) enum ChunkCommands {
    #[command(about = "List chunks")]
    List(ListCommand),
}

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ListCommand {
    #[arg(short, long, help = "Display chunk body")]
    pub(crate) long: bool,
    #[arg(short = 'H', long, help = "Add a header row to each column")]
    pub(crate) header: bool,
    #[arg(long, help = "Verify the CRC of every chunk")]
    pub(crate) verify_crc: bool,
    #[command(flatten)]
    pub(crate) types: ChunkTypeArgs,
    #[arg()]
    pub(crate) file: PathBuf,
}

impl Command for ListCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        list_chunks(self)
    }
}

/// Lists every chunk up to the terminal chunk, without validating the header.
///
/// A CRC mismatch is reported in the table instead of failing the listing.
fn list_chunks(args: ListCommand) -> anyhow::Result<()> {
    let bytes = read_file(&args.file)?;
    read_signature(&bytes).with_context(|| format!("{} is not a PNG file", args.file.display()))?;

    let mut builder = TableBuilder::new();
    if args.header {
        builder.push_record(
            ["Index", "Type", "Size", "Offset", "CRC"]
                .into_iter()
                .chain(args.verify_crc.then_some("Check"))
                .chain(args.long.then_some("Body")),
        );
    }
    let terminal = args.types.terminal_type();
    let mut reader = ChunkReader::new(&bytes, SIGNATURE_LEN);
    let mut idx = 0;
    loop {
        let offset = reader.position();
        let chunk = reader
            .read_chunk()
            .with_context(|| format!("failed to read chunk #{} of {}", idx + 1, args.file.display()))?;
        idx += 1;
        builder.push_record(
            [
                idx.to_string(),
                chunk.ty().to_string(),
                chunk.length().to_string(),
                format!("{offset:#06x}"),
                format!("{:08x}", chunk.crc()),
            ]
            .into_iter()
            .chain(args.verify_crc.then(|| match chunk.verify_crc() {
                Ok(()) => "ok".to_string(),
                Err(e) => {
                    log::warn!("chunk #{idx}: {e}");
                    "mismatch".to_string()
                }
            }))
            .chain(args.long.then(|| {
                std::str::from_utf8(chunk.data())
                    .unwrap_or_default()
                    .to_string()
            })),
        );
        if chunk.ty() == terminal {
            break;
        }
    }
    let mut table = builder.build();
    table.with(TableStyle::empty());
    println!("{table}");
    Ok(())
}
