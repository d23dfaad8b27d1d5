//! # Check-Digits Subcommand
//!
//! Computes the two check digits of a 12-character body.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use cnpj_core::Cnpj;

use crate::{print_json, OutputFormat};

/// Arguments for the check-digits subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitsArgs {
    /// The 12-character body, masked or unmasked.
    pub body: String,
}

/// Computed digits and the resulting identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDigitsReport {
    /// Canonical body, unmasked and uppercase.
    pub body: String,
    /// The two computed check digits.
    pub check_digits: String,
    /// Body followed by its check digits.
    pub cnpj: String,
    /// Masked form of `cnpj`.
    pub formatted: String,
}

/// Compute the report for `body`.
pub fn check_digits_for(body: &str) -> Result<CheckDigitsReport> {
    let cnpj = Cnpj::from_body(body)
        .with_context(|| format!("cannot compute check digits for {body:?}"))?;
    Ok(CheckDigitsReport {
        body: cnpj.body().to_string(),
        check_digits: cnpj.check_digits().to_string(),
        formatted: cnpj.formatted(),
        cnpj: cnpj.into_inner(),
    })
}

/// Execute the check-digits subcommand.
pub fn run_check_digits(args: &CheckDigitsArgs, format: OutputFormat) -> Result<u8> {
    let report = check_digits_for(&args.body)?;
    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => println!("{}", report.check_digits),
    }
    Ok(0)
}
