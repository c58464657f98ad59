// tests/config_tests.rs
use knot_hash::config::{config_path, Config};
use knot_hash::consts::CONFIG_ENV_VAR;
use knot_hash::{knot_hash, knot_hash_with, KnotError, KnotParams};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_config_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[scrambler]\nsize = 256\n\n[digest]\nrounds = 64\nsuffix = [17, 31, 73, 47, 23]\n",
    )
    .unwrap();

    let conf = Config::from_path(&path).unwrap();
    assert_eq!(conf, Config::default());
    assert_eq!(conf.params(), KnotParams::default());

    assert_eq!(
        knot_hash_with(b"AoC 2017", &conf.params()).unwrap(),
        knot_hash(b"AoC 2017").unwrap()
    );
}

#[test]
fn custom_rounds_change_the_digest() {
    let conf = Config::from_toml_str("[digest]\nrounds = 1\n").unwrap();
    let one_round = knot_hash_with(b"AoC 2017", &conf.params()).unwrap();
    assert_ne!(one_round, knot_hash(b"AoC 2017").unwrap());
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().unwrap();
    let err = Config::from_path(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, KnotError::Config(_)));
}

#[test]
fn env_var_overrides_config_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::env::set_var(CONFIG_ENV_VAR, &path);
    assert_eq!(config_path(), Some(path));
    std::env::remove_var(CONFIG_ENV_VAR);
}
