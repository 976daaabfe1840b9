use crate::utils::{chunk, data_end_png, ihdr, png, sample_png, write};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: A valid PNG file exists.
/// Action: Run `pngwalk info <file>`.
/// Expectation: All header fields and the chunk count are printed.
#[test]
fn info_basic() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "basic.png", &sample_png(b"hello"));

    cargo_bin_cmd!("pngwalk")
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Width: 800")
                .and(predicate::str::contains("Height: 600"))
                .and(predicate::str::contains("Bit depth: 8"))
                .and(predicate::str::contains("Color type: 6"))
                .and(predicate::str::contains("Interlace method: 0"))
                .and(predicate::str::contains("Chunks: 5")),
        );
}

/// Precondition: A valid PNG file exists.
/// Action: Run `pngwalk info --json <file>`.
/// Expectation: The header is printed as a JSON object.
#[test]
fn info_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "json.png", &sample_png(b"hello"));

    let output = cargo_bin_cmd!("pngwalk")
        .args(["info", "--json"])
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["width"], 800);
    assert_eq!(value["height"], 600);
    assert_eq!(value["colorType"], 6);
    assert_eq!(value["numberOfChunks"], 5);
    assert_eq!(value["payloadChunks"], 2);
}

/// Precondition: A PNG file whose header declares Adam7 interlacing.
/// Action: Run `pngwalk info` with and without `--allow-interlace`.
/// Expectation: Rejected by default, accepted with the flag.
#[test]
fn info_interlaced() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        dir.path(),
        "interlaced.png",
        &png(&[ihdr(4, 4, [8, 2, 0, 0, 1]), chunk(b"IEND", &[])]),
    );

    cargo_bin_cmd!("pngwalk")
        .arg("info")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid interlace method"));

    cargo_bin_cmd!("pngwalk")
        .args(["info", "--allow-interlace"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Interlace method: 1"));
}

/// Precondition: A file that is not a PNG.
/// Action: Run `pngwalk info <file>`.
/// Expectation: The command fails with a signature error instead of crashing.
#[test]
fn info_not_png() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "garbage.png", b"definitely not a png file");

    cargo_bin_cmd!("pngwalk")
        .arg("info")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid signature"));
}

/// Precondition: The file does not exist.
/// Action: Run `pngwalk info <file>`.
/// Expectation: The command fails naming the file.
#[test]
fn info_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("missing.png");

    cargo_bin_cmd!("pngwalk")
        .arg("info")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

/// Precondition: A PNG file cut off in the middle of a chunk.
/// Action: Run `pngwalk info <file>`.
/// Expectation: The command fails with a truncation error.
#[test]
fn info_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = sample_png(b"hello");
    bytes.truncate(bytes.len() - 20);
    let file = write(dir.path(), "truncated.png", &bytes);

    cargo_bin_cmd!("pngwalk")
        .arg("info")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("truncated chunk"));
}

/// Precondition: A file whose payload and terminal chunks are `DATA` and `END `.
/// Action: Run `pngwalk info` with `--payload-type DATA --terminal-type END`.
/// Expectation: The stream ends at `END ` and the `DATA` chunk is the payload.
#[test]
fn info_custom_chunk_types() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "data_end.bin", &data_end_png(b"hello"));

    cargo_bin_cmd!("pngwalk")
        .args(["info", "--payload-type", "DATA", "--terminal-type", "END"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Width: 800")
                .and(predicate::str::contains("Chunks: 3"))
                .and(predicate::str::contains("in 1 chunk(s)")),
        );
}

/// Precondition: A file terminated by `END ` instead of `IEND`.
/// Action: Run `pngwalk info` with the default chunk types.
/// Expectation: The read runs off the end of the file and fails.
#[test]
fn info_default_types_miss_custom_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "data_end.bin", &data_end_png(b"hello"));

    cargo_bin_cmd!("pngwalk")
        .arg("info")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed chunk length"));
}

/// Precondition: A chunk type argument that is longer than four bytes.
/// Action: Run `pngwalk info --terminal-type IENDX <file>`.
/// Expectation: The argument is rejected.
#[test]
fn info_invalid_chunk_type_argument() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "basic.png", &sample_png(b"hello"));

    cargo_bin_cmd!("pngwalk")
        .args(["info", "--terminal-type", "IENDX"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk type must be 4 bytes"));
}

/// Precondition: A header whose width is `2^31`.
/// Action: Run `pngwalk info` with and without `--strict`.
/// Expectation: Accepted by default, rejected with the flag.
#[test]
fn info_wide_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        dir.path(),
        "wide.png",
        &png(&[ihdr(0x8000_0000, 1, [8, 6, 0, 0, 0]), chunk(b"IEND", &[])]),
    );

    cargo_bin_cmd!("pngwalk")
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Width: 2147483648"));

    cargo_bin_cmd!("pngwalk")
        .args(["info", "--strict"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid width"));
}
