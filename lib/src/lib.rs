//! A library for walking the chunk stream of PNG files
//!
//! The whole file is expected to be in memory. [`Container::read_png`] checks
//! the signature, reads every chunk up to and including the terminal chunk,
//! validates the header chunk and keeps the chunks as borrowed views into the
//! buffer. [`Container::decompress_payload`] inflates the concatenated data of
//! all payload chunks.
//!
//! ```
//! use libpngwalk::{Chunk, ChunkType, Container, ReadOptions};
//!
//! # fn chunk(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
//! #     let mut v = (data.len() as u32).to_be_bytes().to_vec();
//! #     v.extend_from_slice(ty);
//! #     v.extend_from_slice(data);
//! #     v.extend_from_slice(&[0; 4]);
//! #     v
//! # }
//! let mut png = libpngwalk::PNG_SIGNATURE.to_vec();
//! png.extend(chunk(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]));
//! png.extend(chunk(b"IDAT", &[0x78, 0x9C, 0x63, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01]));
//! png.extend(chunk(b"IEND", &[]));
//!
//! let container = Container::read_png(&png, ReadOptions::default())?;
//! assert_eq!(container.header().unwrap().width(), 1);
//! assert_eq!(container.chunks()[1].ty(), ChunkType::IDAT);
//! assert_eq!(container.decompress_payload()?, [0]);
//! # Ok::<(), libpngwalk::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/libpngwalk/0.1.0")]
pub(crate) mod chunk;
pub(crate) mod container;
pub(crate) mod decompress;
pub(crate) mod error;
pub(crate) mod header;
pub(crate) mod options;

pub use chunk::*;
pub use container::*;
pub use decompress::*;
pub use error::*;
pub use header::*;
pub use options::*;
