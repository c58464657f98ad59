// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use crate::consts::{BLOCK_LEN, CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::core::KnotParams;
use crate::error::{KnotError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrambler: ScramblerSection,
    pub digest: DigestSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScramblerSection {
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestSection {
    pub rounds: usize,
    pub suffix: Vec<usize>,
}

impl Default for ScramblerSection {
    fn default() -> Self {
        default_scrambler()
    }
}

impl Default for DigestSection {
    fn default() -> Self {
        default_digest()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config =
            toml::from_str(content).map_err(|e| KnotError::Config(e.to_string()))?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| KnotError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Size must be usable by both the scrambler and the digest reducer,
    /// and every suffix length must fit the buffer.
    pub fn validate(&self) -> Result<()> {
        let size = self.scrambler.size;
        if size == 0 || size % BLOCK_LEN != 0 {
            return Err(KnotError::InvalidBufferSize {
                size,
                block_len: BLOCK_LEN,
            });
        }
        if let Some(&length) = self.digest.suffix.iter().find(|&&l| l > size) {
            return Err(KnotError::InvalidLength { length, size });
        }
        Ok(())
    }

    pub fn params(&self) -> KnotParams {
        KnotParams {
            size: self.scrambler.size,
            rounds: self.digest.rounds,
            suffix: self.digest.suffix.clone(),
        }
    }
}

/// `$KNOT_CONFIG`, else `<config dir>/knot-hash/config.toml`
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let Some(path) = config_path().filter(|p| p.exists()) else {
            #[cfg(feature = "logging")]
            debug!("no config file found, using built-in defaults");
            return Config::default();
        };

        match Config::from_path(&path) {
            Ok(conf) => conf,
            Err(_err) => {
                #[cfg(feature = "logging")]
                warn!(path = %path.display(), error = %_err, "ignoring config file");
                Config::default()
            }
        }
    })
}
