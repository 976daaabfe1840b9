use flate2::{Compression, write::ZlibEncoder};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1A\n";

pub fn chunk(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut crc = crc32fast::Hasher::new();
    crc.update(ty);
    crc.update(data);
    let mut bytes = Vec::with_capacity(data.len() + 12);
    bytes.extend_from_slice(&(data.len() as u32).to_be_bytes());
    bytes.extend_from_slice(ty);
    bytes.extend_from_slice(data);
    bytes.extend_from_slice(&crc.finalize().to_be_bytes());
    bytes
}

pub fn ihdr(width: u32, height: u32, fields: [u8; 5]) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&fields);
    chunk(b"IHDR", &data)
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn png(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = SIGNATURE.to_vec();
    for c in chunks {
        bytes.extend_from_slice(c);
    }
    bytes
}

/// 800x600 RGBA header, a text chunk, `payload` split over two IDAT chunks, IEND.
pub fn sample_png(payload: &[u8]) -> Vec<u8> {
    let compressed = zlib(payload);
    let (first, second) = compressed.split_at(compressed.len() / 2);
    png(&[
        ihdr(800, 600, [8, 6, 0, 0, 0]),
        chunk(b"tEXt", b"Comment\0sample"),
        chunk(b"IDAT", first),
        chunk(b"IDAT", second),
        chunk(b"IEND", &[]),
    ])
}

/// 800x600 RGBA header, `payload` in one `DATA` chunk, `END ` as terminal.
pub fn data_end_png(payload: &[u8]) -> Vec<u8> {
    png(&[
        ihdr(800, 600, [8, 6, 0, 0, 0]),
        chunk(b"DATA", &zlib(payload)),
        chunk(b"END ", &[]),
    ])
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}
