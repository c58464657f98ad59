// src/driver.rs
//! Command-line plumbing shared by the `knot` binary
//!
//! Argument handling, stdin clean-up and rendering of the output lines live
//! here so they can be exercised without spawning a process.

#[cfg(feature = "logging")]
use tracing::info;

use crate::core::{knot_hash_str_with, knot_product_with, KnotParams};
use crate::enums::KnotMode;
use crate::error::{KnotError, Result};
use crate::lengths::parse_numeric;

pub const USAGE: &str = "knot [product|hash|all] [INPUT]";

/// What the user asked for; `input: None` means read stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: KnotMode,
    pub input: Option<String>,
}

/// Parse arguments after the program name.
///
/// No arguments selects the default mode reading stdin.
pub fn parse_args<I, S>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);

    let mode = match args.next() {
        Some(arg) => arg
            .parse::<KnotMode>()
            .map_err(|e| KnotError::Usage(format!("{e}; {USAGE}")))?,
        None => KnotMode::default(),
    };
    let input = args.next();

    if args.next().is_some() {
        return Err(KnotError::Usage(format!(
            "too many arguments, quote INPUT if it contains spaces; {USAGE}"
        )));
    }

    Ok(Invocation { mode, input })
}

/// Drop one trailing `\n` or `\r\n`, as left by piping a file or `echo`.
pub fn strip_line_ending(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

/// Output lines for `mode` over `input`: `product: N` then `hash: HEX`.
pub fn render(mode: KnotMode, input: &str, params: &KnotParams) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(2);

    if matches!(mode, KnotMode::Product | KnotMode::All) {
        let lengths = parse_numeric(input)?;
        let product = knot_product_with(&lengths, params.size)?;

        #[cfg(feature = "logging")]
        info!(lengths = lengths.len(), "product computed");

        lines.push(format!("product: {product}"));
    }

    if matches!(mode, KnotMode::Hash | KnotMode::All) {
        let hash = knot_hash_str_with(input, params)?;

        #[cfg(feature = "logging")]
        info!(chars = input.chars().count(), "hash computed");

        lines.push(format!("hash: {hash}"));
    }

    Ok(lines)
}
