use super::{ChunkType, Crc32};
use crate::error::{Error, Result};

/// A trait representing a chunk in a PNG stream.
///
/// A chunk is the basic unit of a PNG stream. Each chunk consists of:
/// - A length field (4 bytes)
/// - A chunk type (4 bytes)
/// - The chunk data (variable length)
/// - A CRC32 checksum (4 bytes)
///
/// # Examples
/// ```no_run
/// use libpngwalk::Chunk;
///
/// fn process_chunk<C: Chunk>(chunk: &C) {
///     println!("Chunk type: {}", chunk.ty());
///     println!("Data length: {}", chunk.length());
///     println!("CRC32: {:08x}", chunk.crc());
/// }
/// ```
pub trait Chunk {
    /// Returns the length of the chunk data in bytes.
    #[inline]
    fn length(&self) -> u32 {
        self.data().len() as u32
    }

    /// Returns the type of the chunk.
    fn ty(&self) -> ChunkType;

    /// Returns the data of the chunk.
    fn data(&self) -> &[u8];

    /// Returns the CRC32 checksum of the chunk.
    ///
    /// Chunks read from a buffer return the stored check value; the default
    /// computes it over the type and data.
    #[inline]
    fn crc(&self) -> u32 {
        let mut crc = Crc32::new();
        crc.update(&self.ty().0);
        crc.update(self.data());
        crc.finalize()
    }

    /// Compares the stored check value against one computed from type and data.
    ///
    /// # Errors
    ///
    /// [`Error::ChecksumMismatch`] when they differ.
    #[inline]
    fn verify_crc(&self) -> Result<()> {
        let expected = self.crc();
        let actual = (self.ty(), self.data()).crc();
        if expected != actual {
            return Err(Error::ChecksumMismatch {
                ty: self.ty(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}
