// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which knot computation a caller wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum KnotMode {
    /// One pass over numeric lengths, report `buffer[0] * buffer[1]`
    Product,
    /// 64 salted rounds, report the dense hash
    #[default]
    Hash,
    /// Both of the above on the same input
    All,
}

impl KnotMode {
    pub fn as_str(self) -> &'static str {
        match self {
            KnotMode::Product => "product",
            KnotMode::Hash => "hash",
            KnotMode::All => "all",
        }
    }
}

impl fmt::Display for KnotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnotMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "product" => Ok(KnotMode::Product),
            "hash" => Ok(KnotMode::Hash),
            "all" => Ok(KnotMode::All),
            other => Err(format!("unknown mode {other:?} (expected product, hash or all)")),
        }
    }
}
