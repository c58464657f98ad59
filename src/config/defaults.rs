// src/config/defaults.rs
use crate::config::app::{DigestSection, ScramblerSection};
use crate::consts::{DEFAULT_SIZE, DIGEST_ROUNDS, LENGTH_SUFFIX};

pub fn default_scrambler() -> ScramblerSection {
    ScramblerSection { size: DEFAULT_SIZE }
}

pub fn default_digest() -> DigestSection {
    DigestSection {
        rounds: DIGEST_ROUNDS,
        suffix: LENGTH_SUFFIX.to_vec(),
    }
}
