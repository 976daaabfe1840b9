use crate::chunk::ChunkType;

/// Which interlace methods a header may declare.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum InterlacePolicy {
    /// Only method `0` (no interlace) is accepted.
    #[default]
    NoneOnly,
    /// Methods `0` and `1` (Adam7) are accepted.
    AllowAdam7,
}

/// Options for reading a chunk stream.
///
/// ```
/// use libpngwalk::{ChunkType, InterlacePolicy, ReadOptions};
///
/// let options = ReadOptions::builder()
///     .interlace(InterlacePolicy::AllowAdam7)
///     .verify_crc(true)
///     .payload_type(ChunkType(*b"DATA"))
///     .build();
/// assert!(options.verify_crc());
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReadOptions {
    pub(crate) header_type: ChunkType,
    pub(crate) payload_type: ChunkType,
    pub(crate) terminal_type: ChunkType,
    pub(crate) interlace: InterlacePolicy,
    pub(crate) strict_pixel_format: bool,
    pub(crate) strict_dimensions: bool,
    pub(crate) verify_crc: bool,
}

impl Default for ReadOptions {
    #[inline]
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ReadOptions {
    /// Returns a builder initialized with the defaults.
    #[inline]
    pub const fn builder() -> ReadOptionsBuilder {
        ReadOptionsBuilder::new()
    }

    /// Converts into a builder carrying the same settings.
    #[inline]
    pub fn into_builder(self) -> ReadOptionsBuilder {
        self.into()
    }

    #[inline]
    pub const fn header_type(&self) -> ChunkType {
        self.header_type
    }

    #[inline]
    pub const fn payload_type(&self) -> ChunkType {
        self.payload_type
    }

    #[inline]
    pub const fn terminal_type(&self) -> ChunkType {
        self.terminal_type
    }

    #[inline]
    pub const fn interlace(&self) -> InterlacePolicy {
        self.interlace
    }

    #[inline]
    pub const fn strict_pixel_format(&self) -> bool {
        self.strict_pixel_format
    }

    #[inline]
    pub const fn strict_dimensions(&self) -> bool {
        self.strict_dimensions
    }

    #[inline]
    pub const fn verify_crc(&self) -> bool {
        self.verify_crc
    }
}

/// Builder for [`ReadOptions`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReadOptionsBuilder {
    header_type: ChunkType,
    payload_type: ChunkType,
    terminal_type: ChunkType,
    interlace: InterlacePolicy,
    strict_pixel_format: bool,
    strict_dimensions: bool,
    verify_crc: bool,
}

impl Default for ReadOptionsBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<ReadOptions> for ReadOptionsBuilder {
    #[inline]
    fn from(value: ReadOptions) -> Self {
        Self {
            header_type: value.header_type,
            payload_type: value.payload_type,
            terminal_type: value.terminal_type,
            interlace: value.interlace,
            strict_pixel_format: value.strict_pixel_format,
            strict_dimensions: value.strict_dimensions,
            verify_crc: value.verify_crc,
        }
    }
}

impl ReadOptionsBuilder {
    const fn new() -> Self {
        Self {
            header_type: ChunkType::IHDR,
            payload_type: ChunkType::IDAT,
            terminal_type: ChunkType::IEND,
            interlace: InterlacePolicy::NoneOnly,
            strict_pixel_format: false,
            strict_dimensions: false,
            verify_crc: false,
        }
    }

    /// Type of the chunk that must come first and carry the header.
    #[inline]
    pub fn header_type(&mut self, ty: ChunkType) -> &mut Self {
        self.header_type = ty;
        self
    }

    /// Type of the chunks whose data forms the compressed payload.
    #[inline]
    pub fn payload_type(&mut self, ty: ChunkType) -> &mut Self {
        self.payload_type = ty;
        self
    }

    /// Type of the chunk that ends the stream.
    #[inline]
    pub fn terminal_type(&mut self, ty: ChunkType) -> &mut Self {
        self.terminal_type = ty;
        self
    }

    #[inline]
    pub fn interlace(&mut self, policy: InterlacePolicy) -> &mut Self {
        self.interlace = policy;
        self
    }

    /// Reject (color type, bit depth) pairs the PNG format does not define.
    /// Off by default, any byte value is accepted.
    #[inline]
    pub fn strict_pixel_format(&mut self, strict: bool) -> &mut Self {
        self.strict_pixel_format = strict;
        self
    }

    /// Reject widths and heights above `2^31 - 1`, the PNG limit.
    /// Off by default, any non-zero 32-bit value is accepted.
    #[inline]
    pub fn strict_dimensions(&mut self, strict: bool) -> &mut Self {
        self.strict_dimensions = strict;
        self
    }

    /// Check every chunk's stored CRC while reading. Off by default.
    #[inline]
    pub fn verify_crc(&mut self, verify: bool) -> &mut Self {
        self.verify_crc = verify;
        self
    }

    #[inline]
    pub fn build(&self) -> ReadOptions {
        ReadOptions {
            header_type: self.header_type,
            payload_type: self.payload_type,
            terminal_type: self.terminal_type,
            interlace: self.interlace,
            strict_pixel_format: self.strict_pixel_format,
            strict_dimensions: self.strict_dimensions,
            verify_crc: self.verify_crc,
        }
    }
}
