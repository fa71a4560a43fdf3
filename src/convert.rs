use itertools::Itertools;
use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("listing has no bits after removing comments and spaces")]
    EmptyListing,
    #[error("listing contains {0:?}, expected only 0 and 1")]
    ForeignCharacter(char),
    #[error("{0:?} is not a hexadecimal digit")]
    BadHexDigit(char),
}

/// Runs the whole pipeline: clean every line, join them, and encode the
/// result as bytes.
pub fn listing_to_bytes(text: &str) -> Result<Vec<u8>, ConvertError> {
    to_bytes(&assemble(text))
}

// Everything at or after the first `;` goes, along with the character
// immediately before the marker; listings put a space there.
fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        None => line,
        Some(0) => "",
        Some(idx) => &line[..idx - 1],
    }
}

// Comment-stripped lines, spaces removed, joined with no separator.
fn assemble(text: &str) -> String {
    text.lines()
        .map(strip_comment)
        .map(|line| line.replace(' ', ""))
        .collect()
}

/// Encodes a string of binary digits as its minimal big-endian bytes.
///
/// The string is parsed as one base-2 integer, so leading zero bits do not
/// widen the output; the value survives, the width does not. The integer is
/// rendered as hexadecimal text, left-padded with a single `0` digit when
/// the digit count is odd, and the digit pairs become the output bytes.
fn to_bytes(bits: &str) -> Result<Vec<u8>, ConvertError> {
    let value = BigUint::parse_bytes(bits.as_bytes(), 2).ok_or_else(|| {
        match bits.chars().find(|c| !matches!(c, '0' | '1')) {
            Some(c) => ConvertError::ForeignCharacter(c),
            None => ConvertError::EmptyListing,
        }
    })?;

    // `{:#x}` renders with a `0x` prefix; drop it before pairing digits.
    let hex = format!("{:#x}", value);
    let hex = hex.trim_start_matches("0x");
    let padded = if hex.len() % 2 == 0 {
        hex.to_string()
    } else {
        format!("0{hex}")
    };

    padded
        .chars()
        .tuples()
        .map(|(hi, lo)| Ok(hex_digit(hi)? << 4 | hex_digit(lo)?))
        .collect()
}

fn hex_digit(c: char) -> Result<u8, ConvertError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ConvertError::BadHexDigit(c))
}
