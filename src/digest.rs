// src/digest.rs
//! Digest reducer — folds a sparse hash into a dense hash
//!
//! The terminal buffer is split into contiguous blocks of [`BLOCK_LEN`]
//! elements; each block XORs down to one byte. The dense hash renders as
//! lowercase hex, two characters per byte.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "logging")]
use tracing::debug;

use crate::consts::BLOCK_LEN;
use crate::error::{KnotError, Result};

/// XOR-reduced digest bytes, one per block, in block order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseHash(Vec<u8>);

impl DenseHash {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase, zero-padded hex
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for DenseHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for DenseHash {
    type Err = KnotError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(hex::decode(s)?))
    }
}

impl AsRef<[u8]> for DenseHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for DenseHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DenseHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Reduce a sparse hash to its dense hash.
///
/// The buffer length must be a non-zero multiple of [`BLOCK_LEN`]. Buffers
/// larger than 256 elements can fold to values above a byte; those are
/// rejected with [`KnotError::ElementOutOfRange`] instead of truncated.
pub fn reduce(buffer: &[usize]) -> Result<DenseHash> {
    let size = buffer.len();
    if size == 0 || size % BLOCK_LEN != 0 {
        return Err(KnotError::InvalidBufferSize {
            size,
            block_len: BLOCK_LEN,
        });
    }

    let bytes = buffer
        .chunks_exact(BLOCK_LEN)
        .enumerate()
        .map(|(block, chunk)| {
            let value = chunk.iter().fold(0, |acc, &x| acc ^ x);
            u8::try_from(value).map_err(|_| KnotError::ElementOutOfRange { block, value })
        })
        .collect::<Result<Vec<u8>>>()?;

    #[cfg(feature = "logging")]
    debug!(blocks = bytes.len(), "reduced sparse hash");

    Ok(DenseHash(bytes))
}

/// [`reduce`] straight to hex
pub fn reduce_to_hex(buffer: &[usize]) -> Result<String> {
    reduce(buffer).map(|hash| hash.to_hex())
}
