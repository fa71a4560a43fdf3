//! Converts text listings of binary digits into raw binary files.
//!
//! A listing is plain text made of `0`s and `1`s, with spaces wherever they
//! help readability and `;` comments running to the end of the line.

pub mod convert;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Convert(#[from] convert::ConvertError),
}

/// Reads the listing at `path` and writes the encoded bytes next to it,
/// at `<path>.bin` (appended, so `rom.txt` becomes `rom.txt.bin`).
///
/// Returns the output path. An existing file there is overwritten.
pub fn run(path: &Path) -> Result<PathBuf, Error> {
    let text = fs::read_to_string(path)?;
    let bytes = convert::listing_to_bytes(&text)?;

    let mut out = path.as_os_str().to_os_string();
    out.push(".bin");
    let out = PathBuf::from(out);

    fs::write(&out, bytes)?;
    Ok(out)
}
