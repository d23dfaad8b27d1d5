//! # cnpj CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cnpj_cli::check_digits::{run_check_digits, CheckDigitsArgs};
use cnpj_cli::format::{run_format, FormatArgs};
use cnpj_cli::generate::{run_generate, GenerateArgs};
use cnpj_cli::validate::{run_validate, ValidateArgs};
use cnpj_cli::OutputFormat;

/// CNPJ toolkit.
///
/// Validates and generates Brazilian alphanumeric CNPJ identifiers
/// (12 body characters plus 2 modulo-11 check digits).
#[derive(Parser, Debug)]
#[command(name = "cnpj", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identifiers given as arguments.
    Validate(ValidateArgs),

    /// Generate random valid identifiers.
    Generate(GenerateArgs),

    /// Compute the check digits of a 12-character body.
    CheckDigits(CheckDigitsArgs),

    /// Render a valid identifier as XX.XXX.XXX/XXXX-XX.
    Format(FormatArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "cnpj CLI starting");

    let format = OutputFormat::from_flag(cli.json);
    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, format),
        Commands::Generate(args) => run_generate(args, format),
        Commands::CheckDigits(args) => run_check_digits(args, format),
        Commands::Format(args) => run_format(args, format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate_ids() {
        let cli = Cli::try_parse_from(["cnpj", "validate", "12.ABC.345/01DE-35", "x"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.ids, vec!["12.ABC.345/01DE-35", "x"]);
            assert!(!args.only_invalid);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_only_invalid() {
        let cli = Cli::try_parse_from(["cnpj", "validate", "--only-invalid", "x"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.ids, vec!["x"]);
            assert!(args.only_invalid);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_rejects_validate_without_ids() {
        assert!(Cli::try_parse_from(["cnpj", "validate"]).is_err());
        assert!(Cli::try_parse_from(["cnpj", "validate", "--only-invalid"]).is_err());
    }

    #[test]
    fn cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["cnpj", "generate"]).unwrap();
        if let Commands::Generate(args) = cli.command {
            assert!(!args.numeric);
            assert!(!args.masked);
            assert!(args.seed.is_none());
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "cnpj", "generate", "--numeric", "--masked", "--seed", "42",
        ])
        .unwrap();
        if let Commands::Generate(args) = cli.command {
            assert!(args.numeric);
            assert!(args.masked);
            assert_eq!(args.seed, Some(42));
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_check_digits() {
        let cli = Cli::try_parse_from(["cnpj", "check-digits", "12ABC34501DE"]).unwrap();
        if let Commands::CheckDigits(args) = cli.command {
            assert_eq!(args.body, "12ABC34501DE");
        } else {
            panic!("expected check-digits");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cnpj", "format", "12ABC34501DE35", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Format(_)));
    }

    #[test]
    fn cli_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["cnpj"]).is_err());
    }

    #[test]
    fn cli_rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["cnpj", "generate", "--seed", "many"]).is_err());
        assert!(Cli::try_parse_from(["cnpj", "generate", "--count", "5"]).is_err());
    }
}
