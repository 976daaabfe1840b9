use crate::{
    chunk::Chunk,
    error::{Error, Result, UnknownValueError},
    options::{InterlacePolicy, ReadOptions},
};

/// The magic number of PNG
pub const PNG_SIGNATURE: &[u8; SIGNATURE_LEN] = b"\x89PNG\r\n\x1A\n";

/// Byte length of [`PNG_SIGNATURE`]; the first chunk starts at this offset.
pub const SIGNATURE_LEN: usize = 8;

/// Largest dimension the PNG format allows, checked under strict dimensions.
const MAX_STRICT_DIMENSION: u32 = i32::MAX as u32;

/// Splits the signature off `bytes`, returning the chunk stream that follows.
pub fn read_signature(bytes: &[u8]) -> Result<&[u8]> {
    let (signature, body) = bytes
        .split_first_chunk::<SIGNATURE_LEN>()
        .ok_or(Error::InvalidSignature)?;
    if signature != PNG_SIGNATURE {
        return Err(Error::InvalidSignature);
    }
    Ok(body)
}

/// Interlace method declared in the header.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum InterlaceMethod {
    None = 0,
    Adam7 = 1,
}

impl TryFrom<u8> for InterlaceMethod {
    type Error = UnknownValueError;

    #[inline]
    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Adam7),
            value => Err(UnknownValueError(value)),
        }
    }
}

/// Structural fields of the header chunk.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ImageHeader {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bit_depth: u8,
    pub(crate) color_type: u8,
    pub(crate) compression_method: u8,
    pub(crate) filter_method: u8,
    pub(crate) interlace_method: u8,
}

impl ImageHeader {
    /// Exact data length of a header chunk.
    pub const DATA_LEN: u32 = 13;

    /// Validates a header chunk and decodes its fields.
    #[inline]
    pub fn try_from_chunk<C: Chunk>(chunk: C, options: &ReadOptions) -> Result<Self> {
        if chunk.length() != Self::DATA_LEN {
            return Err(Error::BadHeaderLength {
                length: chunk.length(),
            });
        }
        Self::try_from_bytes(chunk.data(), options)
    }

    /// Validates the 13 data bytes of a header chunk.
    pub fn try_from_bytes(data: &[u8], options: &ReadOptions) -> Result<Self> {
        let data: &[u8; 13] = data.try_into().map_err(|_| Error::BadHeaderLength {
            length: u32::try_from(data.len()).unwrap_or(u32::MAX),
        })?;
        let [
            w0,
            w1,
            w2,
            w3,
            h0,
            h1,
            h2,
            h3,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        ] = *data;

        let max = if options.strict_dimensions {
            MAX_STRICT_DIMENSION
        } else {
            u32::MAX
        };
        let width = u32::from_be_bytes([w0, w1, w2, w3]);
        if width == 0 || width > max {
            return Err(Error::BadWidth(width));
        }
        let height = u32::from_be_bytes([h0, h1, h2, h3]);
        if height == 0 || height > max {
            return Err(Error::BadHeight(height));
        }

        if options.strict_pixel_format && !is_valid_pixel_format(color_type, bit_depth) {
            return Err(Error::UnsupportedPixelFormat {
                color_type,
                bit_depth,
            });
        }

        // Only compression method 0 is defined
        if compression_method != 0 {
            return Err(Error::UnsupportedCompression(compression_method));
        }
        // Only filter method 0 is defined
        if filter_method != 0 {
            return Err(Error::UnsupportedFilter(filter_method));
        }
        let interlace_allowed = match options.interlace {
            InterlacePolicy::NoneOnly => interlace_method == 0,
            InterlacePolicy::AllowAdam7 => InterlaceMethod::try_from(interlace_method).is_ok(),
        };
        if !interlace_allowed {
            return Err(Error::UnsupportedInterlace(interlace_method));
        }

        Ok(Self {
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        })
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    #[inline]
    pub const fn color_type(&self) -> u8 {
        self.color_type
    }

    #[inline]
    pub const fn compression_method(&self) -> u8 {
        self.compression_method
    }

    #[inline]
    pub const fn filter_method(&self) -> u8 {
        self.filter_method
    }

    #[inline]
    pub const fn interlace_method(&self) -> u8 {
        self.interlace_method
    }

    /// Typed interlace method. Validation guarantees the raw value is 0 or 1.
    #[inline]
    pub const fn interlace(&self) -> InterlaceMethod {
        match self.interlace_method {
            1 => InterlaceMethod::Adam7,
            _ => InterlaceMethod::None,
        }
    }

    #[cfg(test)]
    pub(crate) const fn to_bytes(&self) -> [u8; 13] {
        let w = self.width.to_be_bytes();
        let h = self.height.to_be_bytes();
        [
            w[0],
            w[1],
            w[2],
            w[3],
            h[0],
            h[1],
            h[2],
            h[3],
            self.bit_depth,
            self.color_type,
            self.compression_method,
            self.filter_method,
            self.interlace_method,
        ]
    }
}

/// Allowed bit depths per color type.
fn is_valid_pixel_format(color_type: u8, bit_depth: u8) -> bool {
    match color_type {
        // greyscale
        0 => matches!(bit_depth, 1 | 2 | 4 | 8 | 16),
        // indexed
        3 => matches!(bit_depth, 1 | 2 | 4 | 8),
        // truecolor, greyscale + alpha, truecolor + alpha
        2 | 4 | 6 => matches!(bit_depth, 8 | 16),
        _ => false,
    }
}
