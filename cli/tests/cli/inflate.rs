use crate::utils::{chunk, data_end_png, ihdr, png, sample_png, write};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

/// Precondition: A PNG file whose payload is split over two IDAT chunks.
/// Action: Run `pngwalk inflate <file>`.
/// Expectation: The decompressed payload is written to stdout.
#[test]
fn inflate_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "stdout.png", &sample_png(b"hello"));

    cargo_bin_cmd!("pngwalk")
        .arg("inflate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::eq(&b"hello"[..]));
}

/// Precondition: A PNG file with a larger payload.
/// Action: Run `pngwalk inflate -o <out> <file>`.
/// Expectation: The output file holds exactly the uncompressed payload.
#[test]
fn inflate_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let payload = (0..100_000u32).map(|i| (i * 7 % 256) as u8).collect::<Vec<_>>();
    let file = write(dir.path(), "file.png", &sample_png(&payload));
    let out = dir.path().join("out.bin");

    cargo_bin_cmd!("pngwalk")
        .arg("inflate")
        .arg("-o")
        .arg(&out)
        .arg(&file)
        .assert()
        .success();
    assert_eq!(fs::read(&out).unwrap(), payload);
}

/// Precondition: A PNG file whose IDAT holds random bytes.
/// Action: Run `pngwalk inflate <file>`.
/// Expectation: The command fails with a decompression error.
#[test]
fn inflate_corrupt_payload() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = png(&[
        ihdr(1, 1, [8, 0, 0, 0, 0]),
        chunk(b"IDAT", &[0x13, 0x37, 0xC0, 0xFF, 0xEE]),
        chunk(b"IEND", &[]),
    ]);
    let file = write(dir.path(), "corrupt.png", &bytes);

    cargo_bin_cmd!("pngwalk")
        .arg("inflate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("decompression failed"));
}

/// Precondition: A PNG file without IDAT chunks.
/// Action: Run `pngwalk inflate <file>`.
/// Expectation: The command fails reporting the missing payload.
#[test]
fn inflate_missing_payload() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = png(&[ihdr(1, 1, [8, 0, 0, 0, 0]), chunk(b"IEND", &[])]);
    let file = write(dir.path(), "empty.png", &bytes);

    cargo_bin_cmd!("pngwalk")
        .arg("inflate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no `IDAT` chunk"));
}

/// Precondition: A valid PNG file.
/// Action: Run `pngwalk --log-level info inflate <file>`.
/// Expectation: Timing records are logged to stderr.
#[test]
fn inflate_logs_timing() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "log.png", &sample_png(b"hello"));

    cargo_bin_cmd!("pngwalk")
        .args(["--log-level", "info", "inflate"])
        .arg(&file)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Parsed 5 chunk(s)")
                .and(predicate::str::contains("Decompressed")),
        );
}

/// Precondition: A file whose payload lives in a `DATA` chunk ended by `END `.
/// Action: Run `pngwalk inflate --payload-type DATA --terminal-type END <file>`.
/// Expectation: The `DATA` payload is decompressed to stdout.
#[test]
fn inflate_custom_chunk_types() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "data_end.bin", &data_end_png(b"hello"));

    cargo_bin_cmd!("pngwalk")
        .args(["inflate", "--payload-type", "DATA", "--terminal-type", "END"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::eq(&b"hello"[..]));
}
