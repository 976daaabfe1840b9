#![no_main]

use libfuzzer_sys::fuzz_target;
use libpngwalk::{Chunk, Container, InterlacePolicy, ReadOptions};

fuzz_target!(|data: &[u8]| {
    let options = ReadOptions::builder()
        .interlace(InterlacePolicy::AllowAdam7)
        .build();
    let Ok(container) = Container::read_from_slice(data, options) else {
        return;
    };
    assert!(container.is_complete());
    assert!(container.header().is_some());
    let consumed = 8 + container
        .chunks()
        .iter()
        .map(|c| 12 + c.length() as usize)
        .sum::<usize>();
    assert!(consumed <= data.len());
    let _ = container.decompress_payload();
});
