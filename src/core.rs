// src/core.rs
//! Entry points — numeric product mode and byte-salted digest mode
//!
//! Both modes share the same [`Scrambler`] and [`reduce`] primitives; they
//! stay separate functions so neither mode's round count can drift.

#[cfg(feature = "logging")]
use tracing::debug;

use crate::consts::{DEFAULT_SIZE, DIGEST_ROUNDS, LENGTH_SUFFIX, PRODUCT_ROUNDS};
use crate::digest::{reduce, reduce_to_hex, DenseHash};
use crate::error::{KnotError, Result};
use crate::lengths::{parse_numeric, salted_str_with, salted_with};
use crate::scrambler::Scrambler;

/// Knobs for a scrambling session: buffer size, digest rounds, salt suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnotParams {
    pub size: usize,
    pub rounds: usize,
    pub suffix: Vec<usize>,
}

impl Default for KnotParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            rounds: DIGEST_ROUNDS,
            suffix: LENGTH_SUFFIX.to_vec(),
        }
    }
}

/// Single pass of `lengths` over a fresh buffer of `size` elements.
pub fn single_pass(lengths: &[usize], size: usize) -> Result<Scrambler> {
    let mut scrambler = Scrambler::new(size)?;
    scrambler.run_rounds(lengths, PRODUCT_ROUNDS)?;
    Ok(scrambler)
}

/// Product of the first two elements after one pass over the default buffer.
pub fn knot_product(lengths: &[usize]) -> Result<u64> {
    knot_product_with(lengths, DEFAULT_SIZE)
}

pub fn knot_product_with(lengths: &[usize], size: usize) -> Result<u64> {
    let scrambler = single_pass(lengths, size)?;
    let product = scrambler
        .first_two_product()
        .ok_or(KnotError::NoProduct { size })?;

    #[cfg(feature = "logging")]
    debug!(size, lengths = lengths.len(), product, "numeric pass done");

    Ok(product)
}

/// Numeric mode straight from comma-separated text.
pub fn knot_product_str(input: &str) -> Result<u64> {
    knot_product(&parse_numeric(input)?)
}

/// Buffer state after all salted rounds, before reduction.
pub fn sparse_hash(input: &[u8]) -> Result<Vec<usize>> {
    sparse_hash_with(input, &KnotParams::default())
}

pub fn sparse_hash_with(input: &[u8], params: &KnotParams) -> Result<Vec<usize>> {
    run_salted(&salted_with(input, &params.suffix), params)
}

/// Like [`sparse_hash_with`], but salting the character codes of `input`.
pub fn sparse_hash_str_with(input: &str, params: &KnotParams) -> Result<Vec<usize>> {
    run_salted(&salted_str_with(input, &params.suffix)?, params)
}

fn run_salted(lengths: &[usize], params: &KnotParams) -> Result<Vec<usize>> {
    let mut scrambler = Scrambler::new(params.size)?;
    let _cursor = scrambler.run_rounds(lengths, params.rounds)?;

    #[cfg(feature = "logging")]
    debug!(
        size = params.size,
        rounds = params.rounds,
        cursor = ?_cursor,
        "sparse hash ready"
    );

    Ok(scrambler.into_parts().0)
}

/// Full knot hash of raw `input` bytes with the standard 256/64/suffix parameters.
pub fn knot_hash(input: &[u8]) -> Result<DenseHash> {
    knot_hash_with(input, &KnotParams::default())
}

pub fn knot_hash_with(input: &[u8], params: &KnotParams) -> Result<DenseHash> {
    reduce(&sparse_hash_with(input, params)?)
}

/// Knot hash of a string's character codes; `"é"` hashes as `[233]`.
///
/// Characters above U+00FF fail with [`KnotError::InvalidCharCode`].
pub fn knot_hash_str(input: &str) -> Result<DenseHash> {
    knot_hash_str_with(input, &KnotParams::default())
}

pub fn knot_hash_str_with(input: &str, params: &KnotParams) -> Result<DenseHash> {
    reduce(&sparse_hash_str_with(input, params)?)
}

/// Hex digest of a string's character codes.
pub fn knot_hash_hex(input: &str) -> Result<String> {
    reduce_to_hex(&sparse_hash_str_with(input, &KnotParams::default())?)
}
