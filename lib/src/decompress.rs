use crate::{
    chunk::Chunk,
    error::{Error, Result},
};
use flate2::{Decompress, FlushDecompress, Status};
use std::io;

/// Minimum spare output capacity handed to the inflater on every call.
const OUTPUT_STEP: usize = 32 * 1024;

/// Inflates one complete zlib stream.
///
/// # Errors
///
/// [`Error::DecompressionFailed`] if the stream header, body or checksum is
/// invalid, or if `raw` ends before the stream does.
///
/// # Examples
/// ```
/// use libpngwalk::decompress;
///
/// // zlib stream of "hello"
/// let raw = [
///     0x78, 0x9C, 0xCB, 0x48, 0xCD, 0xC9, 0xC9, 0x07, 0x00, 0x06, 0x2C, 0x02, 0x15,
/// ];
/// assert_eq!(decompress(&raw).unwrap(), b"hello");
/// ```
#[inline]
pub fn decompress(raw: &[u8]) -> Result<Vec<u8>> {
    decompress_slices([raw])
}

/// Inflates one zlib stream carried by the data of several chunks, in order.
///
/// Chunk data is fed to the inflater directly, without first being copied
/// into one contiguous buffer.
///
/// # Examples
/// ```
/// use libpngwalk::{ChunkType, RawChunk, decompress_chunks};
///
/// // zlib stream of "hello", split over two chunks
/// let chunks = [
///     RawChunk::from_data(ChunkType::IDAT, [0x78, 0x9C, 0xCB, 0x48, 0xCD]),
///     RawChunk::from_data(ChunkType::IDAT, [0xC9, 0xC9, 0x07, 0x00, 0x06, 0x2C, 0x02, 0x15]),
/// ];
/// assert_eq!(decompress_chunks(&chunks).unwrap(), b"hello");
/// ```
#[inline]
pub fn decompress_chunks<'a, C, I>(chunks: I) -> Result<Vec<u8>>
where
    C: Chunk + 'a,
    I: IntoIterator<Item = &'a C>,
{
    decompress_slices(chunks.into_iter().map(|c| c.data()))
}

/// Inflates one zlib stream split across several slices, in order.
///
/// The slices are fed to the inflater one after another, so the stream may be
/// split at any byte boundary. Bytes following the end of the stream are
/// ignored.
pub fn decompress_slices<'a, I>(slices: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut inflater = Decompress::new(true);
    let mut out = Vec::new();
    let mut finished = false;

    for mut input in slices {
        while !input.is_empty() && !finished {
            reserve_output(&mut out);
            let (in_before, out_before) = (inflater.total_in(), inflater.total_out());
            let status = inflater
                .decompress_vec(input, &mut out, FlushDecompress::None)
                .map_err(|e| Error::DecompressionFailed(io::Error::new(io::ErrorKind::InvalidData, e)))?;
            let consumed = (inflater.total_in() - in_before) as usize;
            input = &input[consumed..];
            match status {
                Status::StreamEnd => finished = true,
                Status::Ok | Status::BufError => {
                    if consumed == 0 && inflater.total_out() == out_before {
                        return Err(stalled());
                    }
                }
            }
        }
        if finished && !input.is_empty() {
            log::debug!("ignoring {} byte(s) after end of compressed stream", input.len());
        }
    }

    while !finished {
        reserve_output(&mut out);
        let out_before = inflater.total_out();
        let status = inflater
            .decompress_vec(&[], &mut out, FlushDecompress::Finish)
            .map_err(|e| Error::DecompressionFailed(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        match status {
            Status::StreamEnd => finished = true,
            Status::Ok | Status::BufError => {
                if inflater.total_out() == out_before {
                    return Err(Error::DecompressionFailed(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "compressed stream ended early",
                    )));
                }
            }
        }
    }

    log::debug!(
        "inflated {} byte(s) into {} byte(s)",
        inflater.total_in(),
        inflater.total_out()
    );
    Ok(out)
}

#[inline]
fn reserve_output(out: &mut Vec<u8>) {
    if out.capacity() - out.len() < OUTPUT_STEP {
        out.reserve(OUTPUT_STEP);
    }
}

#[inline]
fn stalled() -> Error {
    Error::DecompressionFailed(io::Error::new(
        io::ErrorKind::InvalidData,
        "inflater made no progress",
    ))
}
