//! # Generate Subcommand
//!
//! Generates one random valid identifier. `--seed` switches to a seeded
//! `StdRng` so that a fixture can be regenerated byte for byte.

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cnpj_core::{generate_with, Alphabet, Cnpj};

use crate::{print_json, OutputFormat};

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Generate a purely numeric identifier (legacy format).
    #[arg(long)]
    pub numeric: bool,

    /// Render with the display mask (XX.XXX.XXX/XXXX-XX).
    #[arg(long)]
    pub masked: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    fn alphabet(&self) -> Alphabet {
        Alphabet::from(!self.numeric)
    }
}

/// Generate one identifier, seeded when `args.seed` is set.
pub fn generate_one(args: &GenerateArgs) -> Cnpj {
    match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded RNG");
            generate_with(&mut StdRng::seed_from_u64(seed), args.alphabet())
        }
        None => generate_with(&mut rand::thread_rng(), args.alphabet()),
    }
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, format: OutputFormat) -> Result<u8> {
    let cnpj = generate_one(args);
    tracing::info!(alphabet = ?args.alphabet(), "generated identifier");

    let rendered = if args.masked {
        cnpj.formatted()
    } else {
        cnpj.into_inner()
    };

    match format {
        OutputFormat::Json => print_json(&rendered)?,
        OutputFormat::Text => println!("{rendered}"),
    }
    Ok(0)
}
