//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Each variant echoes the offending input so that a
//! rejection can be diagnosed from the message alone.

use thiserror::Error;

use crate::checksum::CheckDigits;

/// Reasons a candidate CNPJ or body is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CnpjError {
    /// The candidate was empty.
    #[error("CNPJ is empty")]
    Empty,

    /// The raw input holds a character outside `[A-Za-z0-9./-]`.
    #[error("disallowed character {character:?} at position {position}")]
    DisallowedCharacter {
        /// The first offending character.
        character: char,
        /// Its character index in the raw input.
        position: usize,
    },

    /// The unmasked candidate does not match `[A-Z0-9]{12}[0-9]{2}`.
    #[error("CNPJ must be 12 alphanumeric characters followed by 2 digits, got {0:?}")]
    InvalidShape(String),

    /// The all-zero identifier is never valid.
    #[error("all-zero CNPJ is not valid")]
    AllZero,

    /// A body could not be checksummed: disallowed characters, wrong
    /// length or alphabet, or the all-zero body.
    #[error("invalid CNPJ body: {0:?}")]
    InvalidBody(String),

    /// The claimed check digits differ from the computed ones.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Digits computed from the body.
        expected: CheckDigits,
        /// Digits carried by the candidate.
        found: String,
    },
}
