//! knot — compute knot-hash products and digests from the command line
//!
//! Usage: knot [product|hash|all] [INPUT]
//! Mode defaults to `hash`; INPUT defaults to stdin (one trailing newline
//! stripped).

use std::io::Read;

use anyhow::{Context, Result};
use knot_hash::config;
use knot_hash::driver::{parse_args, render, strip_line_ending};
use knot_hash::KnotParams;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let invocation = parse_args(std::env::args().skip(1))?;

    let input = match invocation.input {
        Some(arg) => arg,
        None => read_stdin()?,
    };

    let params: KnotParams = config::load().params();
    debug!(?params, mode = %invocation.mode, "running");

    let lines = render(invocation.mode, &input, &params)
        .with_context(|| format!("{} mode failed", invocation.mode))?;
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read INPUT from stdin")?;
    Ok(strip_line_ending(buf))
}
