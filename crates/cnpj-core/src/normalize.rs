//! # Normalizer and Format Guard
//!
//! The display mask `XX.XXX.XXX/XXXX-XX` is recognized by character only,
//! never by position: every `.`, `/` and `-` is removed wherever it occurs.
//! The guard runs on the raw input so that stripping cannot hide anything
//! outside the permitted alphabet.

/// Characters recognized as mask separators.
pub const MASK_CHARACTERS: [char; 3] = ['.', '/', '-'];

/// Remove every mask character from `input`, preserving the order of the
/// remaining characters. Case is left untouched.
pub fn strip_mask(input: &str) -> String {
    input.chars().filter(|c| !is_mask_character(*c)).collect()
}

/// True if `input` holds any character outside `[A-Za-z0-9./-]`.
pub fn has_disallowed_characters(input: &str) -> bool {
    first_disallowed_character(input).is_some()
}

/// Character index and value of the first character outside
/// `[A-Za-z0-9./-]`, if any.
pub fn first_disallowed_character(input: &str) -> Option<(usize, char)> {
    input
        .chars()
        .enumerate()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || is_mask_character(*c)))
}

fn is_mask_character(c: char) -> bool {
    MASK_CHARACTERS.contains(&c)
}
