// src/models.rs
use std::fmt;

/// A fixed, named set of characters a password may be built from.
///
/// The four sets are pairwise disjoint, so concatenating the active ones
/// yields a pool with no duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(&self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digits => b"0123456789",
            CharacterClass::Symbols => b"!@#$%^&*()-_=+[]{}|;:,.<>?",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// Classes a config draws from, in guaranteed-placement order.
    pub fn active(config: &PasswordConfig) -> Vec<CharacterClass> {
        let mut classes = vec![CharacterClass::Lowercase, CharacterClass::Uppercase];
        if config.include_numbers {
            classes.push(CharacterClass::Digits);
        }
        if config.include_symbols {
            classes.push(CharacterClass::Symbols);
        }
        classes
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub length: usize,
    pub include_symbols: bool,
    pub include_numbers: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_symbols: true,
            include_numbers: true,
        }
    }
}

/// A freshly generated password, owned by the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        GeneratedPassword(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Keep the secret out of debug output and log lines
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratedPassword")
            .field(&format_args!("<{} chars>", self.0.len()))
            .finish()
    }
}
