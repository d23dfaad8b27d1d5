//! # Format Subcommand
//!
//! Renders a valid identifier with the display mask.

use anyhow::{Context, Result};
use clap::Args;

use cnpj_core::Cnpj;

use crate::{print_json, OutputFormat};

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// A valid identifier, masked or unmasked.
    pub id: String,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, format: OutputFormat) -> Result<u8> {
    let cnpj = Cnpj::new(&args.id).with_context(|| format!("{:?} is not a valid CNPJ", args.id))?;
    match format {
        OutputFormat::Json => print_json(&cnpj.formatted())?,
        OutputFormat::Text => println!("{cnpj}"),
    }
    Ok(0)
}
