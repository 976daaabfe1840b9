use clap::Parser;
use pngwalk::{cli, command::Command};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.init_logger()?;
    cli.execute()
}
