use crate::cli::ChunkTypeName;
use anyhow::Context;
use clap::Args;
use libpngwalk::{ChunkType, Container, InterlacePolicy, ReadOptions};
use std::{fs, path::Path, time::Instant};

/// Chunk types that give the stream its structure.
#[derive(Args, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub(crate) struct ChunkTypeArgs {
    #[arg(long, value_name = "TYPE", help = "Type of the leading header chunk [default: IHDR]")]
    pub(crate) header_type: Option<ChunkTypeName>,
    #[arg(long, value_name = "TYPE", help = "Type of the compressed data chunks [default: IDAT]")]
    pub(crate) payload_type: Option<ChunkTypeName>,
    #[arg(long, value_name = "TYPE", help = "Type of the chunk that ends the stream [default: IEND]")]
    pub(crate) terminal_type: Option<ChunkTypeName>,
}

impl ChunkTypeArgs {
    #[inline]
    pub(crate) fn header_type(&self) -> ChunkType {
        self.header_type.map_or(ChunkType::IHDR, |t| t.0)
    }

    #[inline]
    pub(crate) fn payload_type(&self) -> ChunkType {
        self.payload_type.map_or(ChunkType::IDAT, |t| t.0)
    }

    #[inline]
    pub(crate) fn terminal_type(&self) -> ChunkType {
        self.terminal_type.map_or(ChunkType::IEND, |t| t.0)
    }
}

/// Flags controlling how a file is read and how strictly it is validated.
#[derive(Args, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub(crate) struct ReadArgs {
    #[command(flatten)]
    pub(crate) types: ChunkTypeArgs,
    #[arg(long, help = "Accept Adam7 interlaced images")]
    pub(crate) allow_interlace: bool,
    #[arg(
        long,
        help = "Reject dimensions and color type/bit depth pairs that PNG does not allow"
    )]
    pub(crate) strict: bool,
    #[arg(long, help = "Verify the CRC of every chunk")]
    pub(crate) verify_crc: bool,
}

impl ReadArgs {
    pub(crate) fn options(&self) -> ReadOptions {
        ReadOptions::builder()
            .header_type(self.types.header_type())
            .payload_type(self.types.payload_type())
            .terminal_type(self.types.terminal_type())
            .interlace(if self.allow_interlace {
                InterlacePolicy::AllowAdam7
            } else {
                InterlacePolicy::NoneOnly
            })
            .strict_pixel_format(self.strict)
            .strict_dimensions(self.strict)
            .verify_crc(self.verify_crc)
            .build()
    }
}

pub(crate) fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    let start = Instant::now();
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    log::info!(
        "Read {} byte(s) from {} in {:?}",
        bytes.len(),
        path.display(),
        start.elapsed()
    );
    Ok(bytes)
}

pub(crate) fn read_container<'d>(
    path: &Path,
    bytes: &'d [u8],
    options: ReadOptions,
) -> anyhow::Result<Container<'d>> {
    let start = Instant::now();
    let container = Container::read_png(bytes, options)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    log::info!(
        "Parsed {} chunk(s) in {:?}",
        container.len(),
        start.elapsed()
    );
    Ok(container)
}
