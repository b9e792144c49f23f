//! Random alias generation.
//!
//! Candidates are drawn independently and uniformly from a configurable
//! alphabet using the thread-local RNG. Uniqueness is not this module's
//! concern; see [`crate::application::services::AliasAllocator`].

use rand::Rng;
use std::fmt;
use std::str::FromStr;

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Character set used for generated aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// `[a-zA-Z0-9]`, 62 symbols.
    #[default]
    Alphanumeric,
    /// `[a-zA-Z]`, 52 symbols.
    Letters,
}

impl Alphabet {
    pub fn symbols(self) -> &'static [u8] {
        match self {
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Letters => LETTERS,
        }
    }
}

impl FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alphanumeric" => Ok(Self::Alphanumeric),
            "letters" => Ok(Self::Letters),
            other => Err(format!(
                "unknown alphabet '{other}', expected 'alphanumeric' or 'letters'"
            )),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphanumeric => f.write_str("alphanumeric"),
            Self::Letters => f.write_str("letters"),
        }
    }
}

/// Produces candidate aliases.
///
/// Implementations are pure generators and never touch storage.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a string of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// [`AliasGenerator`] backed by `rand::rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator {
    alphabet: Alphabet,
}

impl RandomAliasGenerator {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        let symbols = self.alphabet.symbols();
        let mut rng = rand::rng();

        (0..length)
            .map(|_| symbols[rng.random_range(0..symbols.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_requested_length() {
        let generator = RandomAliasGenerator::default();

        for length in [1, 6, 12, 64] {
            assert_eq!(generator.generate(length).len(), length);
        }
    }

    #[test]
    fn test_generate_alphanumeric_characters() {
        let generator = RandomAliasGenerator::new(Alphabet::Alphanumeric);

        for _ in 0..100 {
            let alias = generator.generate(16);
            assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_letters_only() {
        let generator = RandomAliasGenerator::new(Alphabet::Letters);

        for _ in 0..100 {
            let alias = generator.generate(16);
            assert!(alias.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_generate_produces_distinct_aliases() {
        let generator = RandomAliasGenerator::default();
        let aliases: HashSet<_> = (0..1000).map(|_| generator.generate(12)).collect();

        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::Alphanumeric.symbols().len(), 62);
        assert_eq!(Alphabet::Letters.symbols().len(), 52);
    }

    #[test]
    fn test_alphabet_from_str() {
        assert_eq!("alphanumeric".parse::<Alphabet>(), Ok(Alphabet::Alphanumeric));
        assert_eq!("LETTERS".parse::<Alphabet>(), Ok(Alphabet::Letters));
        assert!("digits".parse::<Alphabet>().is_err());
    }
}
