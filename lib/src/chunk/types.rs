use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A 4-byte chunk type code.
///
/// Any four bytes form a structurally valid type. The case of each byte
/// carries a property bit, see [`ChunkType::is_critical`] and friends.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    // -- Critical chunks --
    /// Image header
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    /// Palette
    pub const PLTE: ChunkType = ChunkType(*b"PLTE");
    /// Image data
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Image end
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    /// Returns `true` if a decoder must understand this chunk to read the stream.
    ///
    /// ```
    /// use libpngwalk::ChunkType;
    ///
    /// assert!(ChunkType::IDAT.is_critical());
    /// assert!(!ChunkType(*b"tEXt").is_critical());
    /// ```
    #[inline]
    pub const fn is_critical(&self) -> bool {
        self.0[0].is_ascii_uppercase()
    }

    /// Returns `true` if the type is part of the public registry.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.0[1].is_ascii_uppercase()
    }

    /// Returns `true` if the chunk may be copied by editors unaware of its meaning.
    #[inline]
    pub const fn is_safe_to_copy(&self) -> bool {
        self.0[3].is_ascii_lowercase()
    }
}

impl Display for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&String::from_utf8_lossy(&self.0), f)
    }
}

/// Error returned when parsing a [`ChunkType`] from a string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, thiserror::Error)]
pub enum ChunkTypeError {
    /// The string is not exactly four bytes long.
    #[error("chunk type must be 4 bytes, got {0}")]
    InvalidLength(usize),
}

impl FromStr for ChunkType {
    type Err = ChunkTypeError;

    /// ```
    /// use libpngwalk::ChunkType;
    ///
    /// assert_eq!("IDAT".parse(), Ok(ChunkType::IDAT));
    /// assert!("END".parse::<ChunkType>().is_err());
    /// ```
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ChunkTypeError::InvalidLength(s.len()))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 4]> for ChunkType {
    #[inline]
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}
