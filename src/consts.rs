// src/consts.rs
//! Shared constants — buffer geometry, round counts, salt

/// Default circular buffer size (elements `0..256`)
pub const DEFAULT_SIZE: usize = 256;

/// Rounds applied in byte-salted digest mode
pub const DIGEST_ROUNDS: usize = 64;

/// Rounds applied in numeric product mode — a single pass
pub const PRODUCT_ROUNDS: usize = 1;

/// Elements folded into each digest byte
pub const BLOCK_LEN: usize = 16;

/// Fixed suffix appended to byte-derived lengths
pub const LENGTH_SUFFIX: [usize; 5] = [17, 31, 73, 47, 23];

/// Env var pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "KNOT_CONFIG";

/// Config file name looked up under the platform config dir
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Sub-directory of the platform config dir
pub const CONFIG_DIR_NAME: &str = "knot-hash";
