//! # Validate Subcommand
//!
//! Validates each identifier given on the command line and reports the
//! verdict with the rejection reason.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cnpj_core::Cnpj;

use crate::{print_json, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to validate, masked or unmasked.
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Print only the invalid identifiers.
    #[arg(long)]
    pub only_invalid: bool,
}

/// Verdict for a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// The candidate exactly as supplied.
    pub input: String,
    /// Whether the candidate is a valid CNPJ.
    pub valid: bool,
    /// Canonical unmasked form, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Masked form, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Why the candidate was rejected, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Validate one candidate.
pub fn check(input: &str) -> ValidationReport {
    match Cnpj::new(input) {
        Ok(cnpj) => ValidationReport {
            input: input.to_string(),
            valid: true,
            formatted: Some(cnpj.formatted()),
            canonical: Some(cnpj.into_inner()),
            reason: None,
        },
        Err(e) => ValidationReport {
            input: input.to_string(),
            valid: false,
            canonical: None,
            formatted: None,
            reason: Some(e.to_string()),
        },
    }
}

/// Execute the validate subcommand. Returns exit code 1 if any candidate
/// is invalid.
pub fn run_validate(args: &ValidateArgs, format: OutputFormat) -> Result<u8> {
    let mut reports: Vec<ValidationReport> = args.ids.iter().map(|id| check(id)).collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(total = reports.len(), invalid, "validation finished");
    if args.only_invalid {
        reports.retain(|r| !r.valid);
    }

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Text => {
            for r in &reports {
                match (&r.formatted, &r.reason) {
                    (Some(formatted), _) => println!("VALID    {formatted}"),
                    (None, Some(reason)) => println!("INVALID  {}: {reason}", r.input),
                    (None, None) => println!("INVALID  {}", r.input),
                }
            }
        }
    }

    Ok(if invalid == 0 { 0 } else { 1 })
}
