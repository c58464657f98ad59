// src/error.rs
//! Public error type for the entire crate

use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KnotError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnotError {
    #[error("invalid length {length}: exceeds buffer size {size}")]
    InvalidLength { length: usize, size: usize },

    #[error("invalid buffer size {size}: must be a non-zero multiple of {block_len}")]
    InvalidBufferSize { size: usize, block_len: usize },

    #[error("block {block} folds to {value}, which does not fit in a byte")]
    ElementOutOfRange { block: usize, value: usize },

    #[error("buffer size must be at least 1")]
    EmptyBuffer,

    #[error("buffer of size {size} is not a permutation of 0..{size}")]
    NotAPermutation { size: usize },

    #[error("buffer of size {size} has no first two elements to multiply")]
    NoProduct { size: usize },

    #[error("cursor position {position} is outside buffer of size {size}")]
    InvalidCursor { position: usize, size: usize },

    #[error("cannot parse length {token:?}: {source}")]
    ParseLength {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("character {ch:?} has no single-byte code")]
    InvalidCharCode { ch: char },

    #[error("usage: {0}")]
    Usage(String),

    #[error("invalid digest hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("config error: {0}")]
    Config(String),
}
