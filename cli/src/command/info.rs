use crate::command::{
    Command,
    commons::{ReadArgs, read_container, read_file},
};
use clap::Parser;
use libpngwalk::{Container, ImageHeader};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct InfoCommand {
    #[arg(long, help = "Print as JSON")]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) read: ReadArgs,
    #[arg()]
    pub(crate) file: PathBuf,
}

impl Command for InfoCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        show_info(self)
    }
}

#[derive(Serialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
struct Info {
    width: u32,
    height: u32,
    bit_depth: u8,
    color_type: u8,
    compression_method: u8,
    filter_method: u8,
    interlace_method: u8,
    number_of_chunks: usize,
    payload_chunks: usize,
    payload_bytes: usize,
}

impl Info {
    fn new(header: &ImageHeader, container: &Container<'_>) -> Self {
        Self {
            width: header.width(),
            height: header.height(),
            bit_depth: header.bit_depth(),
            color_type: header.color_type(),
            compression_method: header.compression_method(),
            filter_method: header.filter_method(),
            interlace_method: header.interlace_method(),
            number_of_chunks: container.len(),
            payload_chunks: container.payload_chunks().count(),
            payload_bytes: container.payload_len(),
        }
    }
}

fn show_info(args: InfoCommand) -> anyhow::Result<()> {
    let bytes = read_file(&args.file)?;
    let container = read_container(&args.file, &bytes, args.read.options())?;
    let header = container
        .header()
        .ok_or_else(|| anyhow::anyhow!("{} has no header", args.file.display()))?;
    let info = Info::new(header, &container);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Width: {}", info.width);
        println!("Height: {}", info.height);
        println!("Bit depth: {}", info.bit_depth);
        println!("Color type: {}", info.color_type);
        println!("Compression method: {}", info.compression_method);
        println!("Filter method: {}", info.filter_method);
        println!("Interlace method: {}", info.interlace_method);
        println!("Chunks: {}", info.number_of_chunks);
        println!(
            "Payload: {} byte(s) in {} chunk(s)",
            info.payload_bytes, info.payload_chunks
        );
    }
    Ok(())
}
