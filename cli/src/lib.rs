//! The `pngwalk` crate provides a command-line interface for inspecting the
//! chunk stream of PNG files.
//!
//! It is the driver around `libpngwalk`: it reads the file into memory,
//! times the parse, and reports headers, chunk tables and inflated payloads.
pub mod cli;
pub mod command;
