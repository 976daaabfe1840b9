use crate::{
    chunk::{ChunkExt, ChunkType, MIN_CHUNK_BYTES_SIZE, RawChunk},
    error::{Error, Result},
};
use std::mem;

/// Sequential reader of chunk records over an in-memory buffer.
///
/// The reader never copies chunk data; every returned chunk borrows from the
/// buffer it was created with.
#[derive(Clone, Debug)]
pub struct ChunkReader<'d> {
    buffer: &'d [u8],
    cursor: usize,
    fused: bool,
}

impl<'d> ChunkReader<'d> {
    /// Creates a reader positioned at `cursor`.
    #[inline]
    pub const fn new(buffer: &'d [u8], cursor: usize) -> Self {
        Self {
            buffer,
            cursor,
            fused: false,
        }
    }

    /// Current byte offset into the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'d [u8] {
        self.buffer.get(self.cursor..).unwrap_or_default()
    }

    /// Reads the chunk at the current position and advances past it.
    ///
    /// On error the position is left unchanged.
    #[inline]
    pub fn read_chunk(&mut self) -> Result<RawChunk<&'d [u8]>> {
        let (chunk, next) = read_chunk_at(self.buffer, self.cursor)?;
        self.cursor = next;
        Ok(chunk)
    }
}

impl<'d> From<&'d [u8]> for ChunkReader<'d> {
    #[inline]
    fn from(buffer: &'d [u8]) -> Self {
        Self::new(buffer, 0)
    }
}

impl<'d> Iterator for ChunkReader<'d> {
    type Item = Result<RawChunk<&'d [u8]>>;

    /// Yields chunks until the buffer is exhausted. A malformed record is
    /// yielded once as an error, after which the iterator is fused.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.fused || self.cursor >= self.buffer.len() {
            return None;
        }
        let item = self.read_chunk();
        self.fused = item.is_err();
        Some(item)
    }
}

/// Reads one chunk record starting at `cursor`.
///
/// Returns the chunk, borrowing its data from `buffer`, together with the
/// offset of the byte following the record (`cursor + 12 + length`).
///
/// # Errors
///
/// [`Error::MalformedLength`] when fewer than four bytes remain for the
/// length field, [`Error::TruncatedChunk`] when the record declares more bytes
/// than the buffer holds.
///
/// # Examples
/// ```
/// use libpngwalk::{Chunk, ChunkType, read_chunk_at};
///
/// let bytes = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];
/// let (chunk, next) = read_chunk_at(&bytes, 0).unwrap();
/// assert_eq!(chunk.ty(), ChunkType::IEND);
/// assert_eq!(next, 12);
/// ```
pub fn read_chunk_at(buffer: &[u8], cursor: usize) -> Result<(RawChunk<&[u8]>, usize)> {
    let rest = buffer.get(cursor..).unwrap_or_default();
    let available = rest.len();

    // read chunk length
    let (length, r) = rest
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or(Error::MalformedLength {
            offset: cursor,
            available,
        })?;
    let length = u32::from_be_bytes(*length);

    let truncated = || Error::TruncatedChunk {
        offset: cursor,
        needed: MIN_CHUNK_BYTES_SIZE as u64 + u64::from(length),
        available,
    };

    // read a chunk type
    let (ty, r) = r
        .split_first_chunk::<{ mem::size_of::<ChunkType>() }>()
        .ok_or_else(truncated)?;

    // read chunk data
    let data_len = usize::try_from(length).map_err(|_| truncated())?;
    let (data, r) = r.split_at_checked(data_len).ok_or_else(truncated)?;

    // read crc sum
    let (crc, _) = r
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or_else(truncated)?;
    let crc = u32::from_be_bytes(*crc);

    let ty = ChunkType(*ty);
    log::trace!("chunk `{ty}` at {cursor:#x}: {length} byte(s), crc {crc:#010x}");
    let chunk = RawChunk {
        length,
        ty,
        data,
        crc,
    };
    let next = cursor + chunk.bytes_len();
    Ok((chunk, next))
}
