use crate::chunk::ChunkType;
use std::{
    fmt::{Display, Formatter},
    io,
};

/// Unknown value error.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct UnknownValueError(pub(crate) u8);

impl Display for UnknownValueError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown value {}", self.0)
    }
}

impl std::error::Error for UnknownValueError {}

/// Errors produced while walking, validating or decompressing a chunk stream.
///
/// Every variant is terminal for the parse that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fewer than four bytes were left where a chunk length was expected.
    #[error("malformed chunk length at offset {offset}: only {available} byte(s) available")]
    MalformedLength { offset: usize, available: usize },

    /// A chunk declares more bytes than the buffer holds.
    #[error("truncated chunk at offset {offset}: need {needed} byte(s), {available} available")]
    TruncatedChunk {
        offset: usize,
        needed: u64,
        available: usize,
    },

    /// The buffer does not start with the PNG signature.
    #[error("invalid signature")]
    InvalidSignature,

    /// The first chunk is not the header chunk.
    #[error("expected header chunk first, found `{found}`")]
    MissingHeader { found: ChunkType },

    #[error("invalid header length: got {length}, expected 13")]
    BadHeaderLength { length: u32 },

    #[error("invalid width in header: {0:#010x}")]
    BadWidth(u32),

    #[error("invalid height in header: {0:#010x}")]
    BadHeight(u32),

    #[error("invalid compression method: expected 0, got {0:#x}")]
    UnsupportedCompression(u8),

    #[error("invalid filter method: expected 0, got {0:#x}")]
    UnsupportedFilter(u8),

    #[error("invalid interlace method: got {0:#x}")]
    UnsupportedInterlace(u8),

    #[error("unsupported pixel format: color type {color_type} with bit depth {bit_depth}")]
    UnsupportedPixelFormat { color_type: u8, bit_depth: u8 },

    /// A header has already been committed to the container.
    #[error("header already set")]
    HeaderAlreadySet,

    /// The terminal chunk has been appended; the container is frozen.
    #[error("container is already complete")]
    ContainerComplete,

    #[error("no `{ty}` chunk to decompress")]
    MissingPayload { ty: ChunkType },

    #[error("checksum mismatch in `{ty}` chunk: stored {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch {
        ty: ChunkType,
        expected: u32,
        actual: u32,
    },

    #[error("decompression failed: {0}")]
    DecompressionFailed(#[source] io::Error),
}

/// A `Result` alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    #[inline]
    fn from(value: Error) -> Self {
        match value {
            Error::DecompressionFailed(e) => e,
            Error::MalformedLength { .. } | Error::TruncatedChunk { .. } => {
                io::Error::new(io::ErrorKind::UnexpectedEof, value)
            }
            e => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}
