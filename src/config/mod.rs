// src/config/mod.rs
//! Configuration system for knot-hash
//!
//! Central, lazy-loaded global config with TOML + env override.

pub use app::{config_path, load, Config, DigestSection, ScramblerSection};

mod app;
mod defaults;
