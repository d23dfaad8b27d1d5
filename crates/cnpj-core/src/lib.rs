//! # cnpj-core — Brazilian Alphanumeric CNPJ Codec
//!
//! Validates and generates CNPJ identifiers: 12 body characters (digits or
//! uppercase letters) followed by 2 numeric check digits computed with a
//! weighted-sum modulo-11 checksum over character ordinal values.
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtype.** [`Cnpj`] can only be constructed from input that
//!    passes every check. No bare strings for identifiers past the boundary.
//!
//! 2. **Guard before strip.** Disallowed characters are rejected on the raw
//!    input, before the mask characters (`.`, `/`, `-`) are removed, so that
//!    stripping can never hide injected content.
//!
//! 3. **Explicit failure.** [`compute_check_digits`] returns a `Result`, so
//!    "could not compute" is never confused with a computed digit of zero.
//!
//! 4. **Replaceable randomness.** [`generate_with`] takes any [`rand::Rng`];
//!    seeded sources make generation deterministic under test.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No shared mutable state; every operation except generation is pure.

pub mod checksum;
pub mod error;
pub mod generate;
pub mod identity;
pub mod normalize;

// Re-export primary types for ergonomic imports.
pub use checksum::{compute_check_digits, CheckDigits, BODY_LEN, CNPJ_LEN, WEIGHTS};
pub use error::CnpjError;
pub use generate::{generate, generate_with, Alphabet};
pub use identity::{format_masked, validate, Cnpj};
pub use normalize::{first_disallowed_character, has_disallowed_characters, strip_mask};
