use libpngwalk::{ChunkType, ChunkTypeError};
use std::str::FromStr;

/// A chunk type given on the command line.
///
/// Names shorter than four bytes are padded with spaces, so `END` reads as
/// `END `.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ChunkTypeName(pub ChunkType);

impl FromStr for ChunkTypeName {
    type Err = ChunkTypeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            1..4 => Ok(Self(format!("{s:<4}").parse()?)),
            _ => Ok(Self(s.parse()?)),
        }
    }
}
