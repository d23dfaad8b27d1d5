//! # Generator
//!
//! Random CNPJ generation for fixtures and test data. Randomness is taken
//! from any [`rand::Rng`], so a seeded [`rand::rngs::StdRng`] reproduces the
//! same sequence of identifiers.
//!
//! The all-zero body has no check digits; a draw that produces it is
//! discarded and re-drawn, so generation never fails.

use rand::Rng;

use crate::checksum::{self, BODY_LEN};
use crate::identity::Cnpj;

/// Character set used for body positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// Decimal digits only (legacy numeric CNPJ).
    Numeric,
    /// Each position independently a digit or an uppercase letter, with
    /// equal probability.
    #[default]
    Alphanumeric,
}

impl From<bool> for Alphabet {
    /// `true` selects [`Alphabet::Alphanumeric`].
    fn from(alphanumeric: bool) -> Self {
        if alphanumeric {
            Self::Alphanumeric
        } else {
            Self::Numeric
        }
    }
}

/// Generate a random, valid, unmasked uppercase CNPJ using the thread-local
/// RNG. `alphanumeric = false` yields a purely numeric identifier.
pub fn generate(alphanumeric: bool) -> String {
    generate_with(&mut rand::thread_rng(), Alphabet::from(alphanumeric)).into_inner()
}

/// Generate a random CNPJ drawing from `rng`.
pub fn generate_with<R: Rng>(rng: &mut R, alphabet: Alphabet) -> Cnpj {
    loop {
        let body: String = (0..BODY_LEN).map(|_| random_char(rng, alphabet)).collect();
        if checksum::is_all_zero(&body) {
            tracing::debug!("drew all-zero body, drawing again");
            continue;
        }
        let digits = checksum::digits_for(body.as_bytes());
        return Cnpj::from_canonical_parts(body, digits);
    }
}

fn random_char<R: Rng>(rng: &mut R, alphabet: Alphabet) -> char {
    let letter = match alphabet {
        Alphabet::Numeric => false,
        Alphabet::Alphanumeric => rng.gen_bool(0.5),
    };
    if letter {
        char::from(b'A' + rng.gen_range(0..26u8))
    } else {
        char::from(b'0' + rng.gen_range(0..10u8))
    }
}
