//! Random password generation from fixed character classes.
//!
//! Independent of the record store: no shared state, no persistence. Every
//! character is drawn from the OS random source (`OsRng`), which is suitable
//! for secrets; a seedable statistical PRNG is not.

use rand::rngs::OsRng;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// The exact punctuation set used by the `special` class.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassgenError {
    #[error("Password length must be positive")]
    InvalidLength,

    #[error("At least one character class must be selected")]
    NoClasses,

    #[error("Unknown character class: {0}")]
    UnknownClass(String),
}

/// A named set of characters selectable for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Special,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Upper => UPPER,
            CharClass::Lower => LOWER,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Upper => "upper",
            CharClass::Lower => "lower",
            CharClass::Digits => "digits",
            CharClass::Special => "special",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CharClass {
    type Err = PassgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(CharClass::Upper),
            "lower" => Ok(CharClass::Lower),
            "digits" => Ok(CharClass::Digits),
            "special" => Ok(CharClass::Special),
            other => Err(PassgenError::UnknownClass(other.to_string())),
        }
    }
}

/// Generate one password of `length` characters drawn independently and
/// uniformly from the union of the selected class pools.
///
/// Repeated class selections are kept as-is: an overlapping pool skews
/// character frequencies but never drops characters.
pub fn generate(length: usize, classes: &[CharClass]) -> Result<String, PassgenError> {
    if length == 0 {
        return Err(PassgenError::InvalidLength);
    }
    if classes.is_empty() {
        return Err(PassgenError::NoClasses);
    }

    let pool: Vec<char> = classes
        .iter()
        .flat_map(|class| class.charset().chars())
        .collect();

    let mut rng = OsRng;
    let password = (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();
    Ok(password)
}

/// Generate `count` passwords, each an independent [`generate`] call.
pub fn generate_many(
    count: usize,
    length: usize,
    classes: &[CharClass],
) -> Result<Vec<String>, PassgenError> {
    (0..count).map(|_| generate(length, classes)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_password_has_only_digits() {
        let password = generate(12, &[CharClass::Digits]).unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn zero_length_is_invalid() {
        assert_eq!(
            generate(0, &[CharClass::Upper]),
            Err(PassgenError::InvalidLength)
        );
    }

    #[test]
    fn empty_class_selection_is_invalid() {
        assert_eq!(generate(8, &[]), Err(PassgenError::NoClasses));
    }

    #[test]
    fn generate_many_produces_independent_passwords() {
        let passwords =
            generate_many(5, 10, &[CharClass::Upper, CharClass::Lower]).unwrap();
        assert_eq!(passwords.len(), 5);
        for password in &passwords {
            assert_eq!(password.len(), 10);
            assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn full_pool_stays_within_published_charsets() {
        let password = generate(64, &CharClass::ALL).unwrap();
        let pool: String = [UPPER, LOWER, DIGITS, SPECIAL].concat();
        assert!(password.chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn class_names_parse_and_round_trip() {
        for class in CharClass::ALL {
            assert_eq!(class.to_string().parse::<CharClass>().unwrap(), class);
        }
        assert_eq!(
            "emoji".parse::<CharClass>(),
            Err(PassgenError::UnknownClass("emoji".to_string()))
        );
    }
}
