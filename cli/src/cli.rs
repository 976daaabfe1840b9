pub mod value;

use crate::command::{Command, chunk::ChunkCommand, info::InfoCommand, inflate::InflateCommand};
use clap::{Args, Parser, Subcommand};
use std::io;
pub use value::*;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about,
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) commands: Commands,
    #[command(flatten)]
    pub(crate) verbosity: VerbosityArgs,
    #[arg(long, global = true, value_enum, help = "Set the log level")]
    pub(crate) log_level: Option<LogLevel>,
}

impl Cli {
    /// Installs a stderr logger at the level chosen on the command line.
    pub fn init_logger(&self) -> anyhow::Result<()> {
        let level = self
            .log_level
            .unwrap_or_else(|| self.verbosity.log_level())
            .as_level_filter();
        fern::Dispatch::new()
            .format(|out, msg, record| {
                out.finish(format_args!(
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    msg
                ))
            })
            .level(level)
            .chain(io::stderr())
            .apply()?;
        Ok(())
    }
}

impl Command for Cli {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        match self.commands {
            Commands::Info(cmd) => cmd.execute(),
            Commands::Chunk(cmd) => cmd.execute(),
            Commands::Inflate(cmd) => cmd.execute(),
        }
    }
}

#[derive(Args, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub(crate) struct VerbosityArgs {
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Make some output more quiet"
    )]
    quiet: bool,
    #[arg(short, long, global = true, help = "Make some output more verbose")]
    verbose: bool,
}

impl VerbosityArgs {
    #[inline]
    pub(crate) const fn log_level(&self) -> LogLevel {
        match (self.quiet, self.verbose) {
            (true, _) => LogLevel::Off,
            (_, true) => LogLevel::Info,
            (false, false) => LogLevel::Warn,
        }
    }
}

#[derive(Subcommand, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Commands {
    #[command(about = "Show the header fields of a PNG file")]
    Info(InfoCommand),
    #[command(about = "Chunk level operation")]
    Chunk(ChunkCommand),
    #[command(about = "Decompress the image data of a PNG file")]
    Inflate(InflateCommand),
}
