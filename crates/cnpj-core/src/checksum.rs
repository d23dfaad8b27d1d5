//! # Checksum Engine
//!
//! Two-pass weighted-sum modulo-11 check digits over character ordinal
//! values. Each body character contributes `byte - b'0'`, so `'0'..='9'`
//! map to 0..=9 and `'A'..='Z'` map to 17..=42.
//!
//! ## Weights
//!
//! Both passes read the same 13-entry sequence [`WEIGHTS`]:
//!
//! | Pass | Body weights | Extra term |
//! |------|--------------|------------|
//! | 1 | `WEIGHTS[1..13]` = `5,4,3,2,9,8,7,6,5,4,3,2` | none |
//! | 2 | `WEIGHTS[0..12]` = `6,5,4,3,2,9,8,7,6,5,4,3` | first digit × `WEIGHTS[12]` |
//!
//! A remainder below 2 yields digit 0; otherwise the digit is `11 - remainder`.

use serde::Serialize;

use crate::error::CnpjError;
use crate::normalize::{has_disallowed_characters, strip_mask};

/// Number of body characters preceding the check digits.
pub const BODY_LEN: usize = 12;

/// Length of an unmasked CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Base weight sequence shared by both passes.
pub const WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// The two check digits of a CNPJ, each in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CheckDigits {
    /// First check digit (position 13).
    pub first: u8,
    /// Second check digit (position 14), computed over the body plus `first`.
    pub second: u8,
}

impl CheckDigits {
    /// Both digits as ASCII characters.
    pub fn as_chars(&self) -> (char, char) {
        (char::from(b'0' + self.first), char::from(b'0' + self.second))
    }

    /// True if `claimed` is exactly the two-character rendering of these digits.
    pub fn matches(&self, claimed: &str) -> bool {
        let (a, b) = self.as_chars();
        let mut chars = claimed.chars();
        chars.next() == Some(a) && chars.next() == Some(b) && chars.next().is_none()
    }
}

impl std::fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Compute the check digits of a 12-character body.
///
/// The body may carry mask characters and lowercase letters; it is guarded,
/// stripped and uppercased before the checksum runs.
///
/// # Errors
///
/// Returns [`CnpjError::InvalidBody`] if the raw body holds a character
/// outside `[A-Za-z0-9./-]`, if the unmasked body is not exactly 12
/// characters from `[A-Z0-9]`, or if it is the all-zero body.
pub fn compute_check_digits(body: &str) -> Result<CheckDigits, CnpjError> {
    if has_disallowed_characters(body) {
        tracing::debug!(body, "body rejected: disallowed character");
        return Err(CnpjError::InvalidBody(body.to_string()));
    }

    let canonical = strip_mask(body).to_ascii_uppercase();
    if !is_canonical_body(&canonical) {
        tracing::debug!(body, "body rejected: not 12 characters from [A-Z0-9]");
        return Err(CnpjError::InvalidBody(body.to_string()));
    }
    if is_all_zero(&canonical) {
        tracing::debug!(body, "body rejected: all zero");
        return Err(CnpjError::InvalidBody(body.to_string()));
    }

    Ok(digits_for(canonical.as_bytes()))
}

/// True if `s` is exactly [`BODY_LEN`] characters from `[A-Z0-9]`.
pub(crate) fn is_canonical_body(s: &str) -> bool {
    s.len() == BODY_LEN
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

pub(crate) fn is_all_zero(s: &str) -> bool {
    s.bytes().all(|b| b == b'0')
}

/// Checksum over an already canonical body (`[A-Z0-9]{12}`).
pub(crate) fn digits_for(body: &[u8]) -> CheckDigits {
    let (sum1, sum2) = body
        .iter()
        .zip(WEIGHTS.windows(2))
        .fold((0u32, 0u32), |(s1, s2), (&b, w)| {
            let value = u32::from(b - b'0');
            (s1 + value * w[1], s2 + value * w[0])
        });

    let first = check_digit(sum1);
    let second = check_digit(sum2 + u32::from(first) * WEIGHTS[BODY_LEN]);
    CheckDigits { first, second }
}

fn check_digit(sum: u32) -> u8 {
    match sum % 11 {
        r if r < 2 => 0,
        // r is in 2..=10, so the digit is in 1..=9.
        r => (11 - r) as u8,
    }
}
