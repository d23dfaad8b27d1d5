//! # CNPJ Identity Newtype
//!
//! [`Cnpj`] holds the canonical form of a validated identifier: 14
//! characters, unmasked, uppercase. Construction runs the full validation
//! pipeline, so every `Cnpj` value carries correct check digits.
//!
//! ## Validation
//!
//! 1. Empty input is rejected.
//! 2. The raw input must only hold `[A-Za-z0-9./-]`.
//! 3. Mask characters are stripped and letters uppercased.
//! 4. The result must match `[A-Z0-9]{12}[0-9]{2}` and must not be all zero.
//! 5. The last two characters must equal the digits computed from the first 12.
//!
//! Mask placement is not checked: `1.2ABC34501DE35` and `12.ABC.345/01DE-35`
//! normalize to the same identifier.

use serde::{Deserialize, Serialize};

use crate::checksum::{self, compute_check_digits, CheckDigits, BODY_LEN, CNPJ_LEN};
use crate::error::CnpjError;
use crate::normalize::{first_disallowed_character, strip_mask};

/// Brazilian national registry identifier (Cadastro Nacional da Pessoa
/// Jurídica), in the alphanumeric format.
///
/// Stored without mask. [`Display`](std::fmt::Display) renders the display
/// mask `XX.XXX.XXX/XXXX-XX`; [`Cnpj::as_str`] returns the bare 14 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Cnpj {
    /// Parse and validate a CNPJ, masked or unmasked, in any letter case.
    ///
    /// # Errors
    ///
    /// Returns the first [`CnpjError`] the candidate trips over, in the
    /// order listed in the module documentation.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CnpjError> {
        let raw = value.as_ref();
        Self::parse(raw).map_err(|e| {
            tracing::debug!(candidate = raw, error = %e, "CNPJ rejected");
            e
        })
    }

    fn parse(raw: &str) -> Result<Self, CnpjError> {
        if raw.is_empty() {
            return Err(CnpjError::Empty);
        }
        if let Some((position, character)) = first_disallowed_character(raw) {
            return Err(CnpjError::DisallowedCharacter {
                character,
                position,
            });
        }

        let canonical = strip_mask(raw).to_ascii_uppercase();
        if !has_cnpj_shape(&canonical) {
            return Err(CnpjError::InvalidShape(raw.to_string()));
        }
        if checksum::is_all_zero(&canonical) {
            return Err(CnpjError::AllZero);
        }

        let (body, claimed) = canonical.split_at(BODY_LEN);
        let expected = compute_check_digits(body)?;
        if !expected.matches(claimed) {
            return Err(CnpjError::CheckDigitMismatch {
                expected,
                found: claimed.to_string(),
            });
        }

        Ok(Self(canonical))
    }

    /// Build a CNPJ from a 12-character body by appending its check digits.
    ///
    /// The body may carry mask characters and lowercase letters.
    ///
    /// # Errors
    ///
    /// Returns [`CnpjError::InvalidBody`] if the body cannot be checksummed.
    pub fn from_body(body: &str) -> Result<Self, CnpjError> {
        let digits = compute_check_digits(body)?;
        let mut canonical = strip_mask(body).to_ascii_uppercase();
        canonical.push_str(&digits.to_string());
        Ok(Self(canonical))
    }

    /// Wrap an already canonical body and its digits. Callers guarantee
    /// that `body` is `[A-Z0-9]{12}` and not all zero.
    pub(crate) fn from_canonical_parts(body: String, digits: CheckDigits) -> Self {
        let mut canonical = body;
        canonical.push_str(&digits.to_string());
        Self(canonical)
    }

    /// The canonical 14 characters, unmasked and uppercase.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12-character body.
    pub fn body(&self) -> &str {
        &self.0[..BODY_LEN]
    }

    /// The two check digits.
    pub fn check_digits(&self) -> CheckDigits {
        let bytes = self.0.as_bytes();
        CheckDigits {
            first: bytes[BODY_LEN] - b'0',
            second: bytes[BODY_LEN + 1] - b'0',
        }
    }

    /// True if the body holds at least one letter. Purely numeric bodies are
    /// the legacy format.
    pub fn is_alphanumeric(&self) -> bool {
        self.body().bytes().any(|b| b.is_ascii_uppercase())
    }

    /// Render with the display mask: `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        let s = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &s[..2],
            &s[2..5],
            &s[5..8],
            &s[8..12],
            &s[12..]
        )
    }

    /// Consume the identifier, returning the canonical string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// True if `candidate` is a valid CNPJ, masked or unmasked, in any letter
/// case. Never fails: every defect collapses to `false`.
pub fn validate(candidate: &str) -> bool {
    Cnpj::new(candidate).is_ok()
}

/// The masked rendering of `input` if it is a valid CNPJ.
pub fn format_masked(input: &str) -> Option<String> {
    Cnpj::new(input).ok().map(|cnpj| cnpj.formatted())
}

/// `[A-Z0-9]{12}[0-9]{2}` over an already uppercased string.
fn has_cnpj_shape(s: &str) -> bool {
    s.len() == CNPJ_LEN
        && checksum::is_canonical_body(&s[..BODY_LEN])
        && s[BODY_LEN..].bytes().all(|b| b.is_ascii_digit())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::generate::{generate_with, Alphabet};
    use crate::normalize::strip_mask;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn any_cnpj() -> impl Strategy<Value = Cnpj> {
        (any::<u64>(), any::<bool>())
            .prop_map(|(seed, alnum)| {
                generate_with(&mut StdRng::seed_from_u64(seed), Alphabet::from(alnum))
            })
    }

    /// Insert mask characters at the given (wrapped) positions.
    fn with_mask(id: &str, inserts: &[(usize, char)]) -> String {
        let mut out: Vec<char> = id.chars().collect();
        for &(pos, c) in inserts {
            let at = pos % (out.len() + 1);
            out.insert(at, c);
        }
        out.into_iter().collect()
    }

    fn mask_inserts() -> impl Strategy<Value = Vec<(usize, char)>> {
        prop::collection::vec((any::<usize>(), prop::sample::select(vec!['.', '/', '-'])), 0..8)
    }

    proptest! {
        /// Generated identifiers always validate.
        #[test]
        fn generated_always_valid(cnpj in any_cnpj()) {
            prop_assert!(validate(cnpj.as_str()));
            prop_assert!(validate(&cnpj.formatted()));
        }

        /// Inserting mask characters anywhere never changes the verdict.
        #[test]
        fn mask_tolerance(cnpj in any_cnpj(), inserts in mask_inserts()) {
            let masked = with_mask(cnpj.as_str(), &inserts);
            prop_assert_eq!(validate(&masked), validate(&strip_mask(&masked)));
            prop_assert!(validate(&masked));
        }

        /// Lowercasing the body validates identically.
        #[test]
        fn case_insensitive(cnpj in any_cnpj()) {
            let lower = cnpj.as_str().to_ascii_lowercase();
            prop_assert!(validate(&lower));
            prop_assert_eq!(Cnpj::new(&lower).unwrap(), cnpj);
        }

        /// Dropping or adding one character breaks the shape.
        #[test]
        fn length_sensitive(cnpj in any_cnpj(), extra in 0u8..10) {
            let s = cnpj.as_str();
            prop_assert!(!validate(&s[..s.len() - 1]));
            prop_assert!(!validate(&s[1..]));
            let padded = format!("{s}{extra}");
            prop_assert!(!validate(&padded));
        }

        /// Changing either check digit breaks validation.
        #[test]
        fn flipped_digit_rejected(cnpj in any_cnpj(), which in 0usize..2, delta in 1u8..10) {
            let mut bytes = cnpj.as_str().as_bytes().to_vec();
            let i = BODY_LEN + which;
            bytes[i] = b'0' + (bytes[i] - b'0' + delta) % 10;
            let tampered = String::from_utf8(bytes).unwrap();
            prop_assert!(!validate(&tampered));
        }

        /// Any character outside the permitted alphabet rejects the input.
        #[test]
        fn disallowed_character_rejected(
            cnpj in any_cnpj(),
            pos in 0usize..15,
            c in any::<char>().prop_filter("outside permitted alphabet", |c| {
                !(c.is_ascii_alphanumeric() || ['.', '/', '-'].contains(c))
            }),
        ) {
            let mut s: Vec<char> = cnpj.as_str().chars().collect();
            s.insert(pos.min(s.len()), c);
            let s: String = s.into_iter().collect();
            prop_assert!(!validate(&s));
        }

        /// Check digits are a pure function of the body.
        #[test]
        fn check_digits_deterministic(body in "[A-Z0-9]{12}") {
            prop_assume!(body != "000000000000");
            let a = compute_check_digits(&body).unwrap();
            let b = compute_check_digits(&body).unwrap();
            prop_assert_eq!(a, b);
            prop_assert!(a.first <= 9 && a.second <= 9);
            let full = format!("{body}{a}");
            prop_assert!(validate(&full));
        }

        /// Validation never panics on arbitrary input.
        #[test]
        fn validate_never_panics(input in ".{0,32}") {
            let _ = validate(&input);
        }
    }
}
