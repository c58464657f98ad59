// src/lib.rs
//! knot-hash — circular-buffer knot hashing
//!
//! Features:
//! - Circular scrambler with explicit, resumable cursor
//! - Single-pass numeric product mode
//! - 64-round byte-salted dense hash, rendered as lowercase hex
//! - TOML config for buffer size, rounds and salt suffix

pub mod config;
pub mod consts;
pub mod core;
pub mod digest;
pub mod driver;
pub mod enums;
pub mod lengths;
pub mod scrambler;

pub mod error;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{
    knot_hash, knot_hash_hex, knot_hash_str, knot_hash_str_with, knot_hash_with, knot_product,
    knot_product_str, knot_product_with, single_pass, sparse_hash, sparse_hash_str_with,
    sparse_hash_with, KnotParams,
};
pub use digest::{reduce, DenseHash};
pub use enums::KnotMode;
pub use error::{KnotError, Result};
pub use scrambler::{Cursor, Scrambler};
