use crate::command::{
    Command,
    commons::{ReadArgs, read_container, read_file},
};
use anyhow::Context;
use clap::Parser;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct InflateCommand {
    #[arg(short, long, help = "Write to the file instead of stdout")]
    pub(crate) output: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) read: ReadArgs,
    #[arg()]
    pub(crate) file: PathBuf,
}

impl Command for InflateCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        inflate_payload(self)
    }
}

fn inflate_payload(args: InflateCommand) -> anyhow::Result<()> {
    let bytes = read_file(&args.file)?;
    let container = read_container(&args.file, &bytes, args.read.options())?;

    let start = Instant::now();
    let data = container
        .decompress_payload()
        .with_context(|| format!("failed to decompress {}", args.file.display()))?;
    log::info!(
        "Decompressed {} byte(s) into {} byte(s) in {:?}",
        container.payload_len(),
        data.len(),
        start.elapsed()
    );

    match args.output {
        Some(path) => fs::write(&path, &data)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
