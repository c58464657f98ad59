// src/lengths.rs
//! Turning caller input into a length sequence
//!
//! - numeric mode: comma-separated decimal integers, used as-is
//! - byte-salted mode: the input's bytes (or character codes) followed
//!   by a fixed suffix

use crate::consts::LENGTH_SUFFIX;
use crate::error::{KnotError, Result};

/// Parse `"3, 4,1,5"` into `[3, 4, 1, 5]`.
///
/// Surrounding whitespace is ignored and blank input yields no lengths.
/// Empty tokens between commas are an error.
pub fn parse_numeric(input: &str) -> Result<Vec<usize>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<usize>().map_err(|source| KnotError::ParseLength {
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

/// Bytes of `input` followed by the standard suffix.
pub fn salted(input: &[u8]) -> Vec<usize> {
    salted_with(input, &LENGTH_SUFFIX)
}

pub fn salted_with(input: &[u8], suffix: &[usize]) -> Vec<usize> {
    input
        .iter()
        .map(|&b| usize::from(b))
        .chain(suffix.iter().copied())
        .collect()
}

/// Character codes of `input`, each required to fit in a byte.
///
/// `'é'` contributes `233`, not its two UTF-8 bytes. Characters above
/// U+00FF are rejected rather than truncated.
pub fn char_codes(input: &str) -> Result<Vec<u8>> {
    input
        .chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| KnotError::InvalidCharCode { ch }))
        .collect()
}

/// Character codes of `input` followed by the standard suffix.
pub fn salted_str(input: &str) -> Result<Vec<usize>> {
    salted_str_with(input, &LENGTH_SUFFIX)
}

pub fn salted_str_with(input: &str, suffix: &[usize]) -> Result<Vec<usize>> {
    Ok(salted_with(&char_codes(input)?, suffix))
}
