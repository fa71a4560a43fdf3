use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Converts a bit-string listing to a raw binary file
#[derive(Debug, Parser)]
struct Opts {
    /// The listing to convert; output goes to `<file>.bin`
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    bits2bin::run(&opts.file)
        .with_context(|| format!("failed to convert {}", opts.file.display()))?;

    Ok(())
}
