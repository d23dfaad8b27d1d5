//! # cnpj-cli — Command-Line Front End for the CNPJ Codec
//!
//! Thin clap-based wrapper over `cnpj-core`. Handlers parse arguments,
//! delegate to the library, and render results as text or JSON.
//!
//! ## Subcommands
//!
//! - `cnpj validate`: Validate identifiers given as arguments.
//! - `cnpj generate`: Generate a random valid identifier.
//! - `cnpj check-digits`: Compute the check digits of a 12-character body.
//! - `cnpj format`: Render a valid identifier with the display mask.
//!
//! ```bash
//! cnpj validate 12.ABC.345/01DE-35 00.623.904/0001-73
//! cnpj generate --masked
//! cnpj generate --numeric --seed 42
//! cnpj --json check-digits 12ABC34501DE
//! ```
//!
//! ## Crate Policy
//!
//! - No business logic here; every decision is made by `cnpj-core`.
//! - Results go to stdout, diagnostics go to stderr through `tracing`.

pub mod check_digits;
pub mod format;
pub mod generate;
pub mod validate;

use anyhow::{Context, Result};
use serde::Serialize;

/// How handlers render their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

impl OutputFormat {
    /// `--json` selects [`OutputFormat::Json`].
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Serialize `value` as pretty JSON and print it to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}
