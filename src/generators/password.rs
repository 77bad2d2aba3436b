// src/generators/password.rs
use thiserror::Error;

use crate::crypto::{CryptoError, RandomSource, SecureRandom};
use crate::models::{CharacterClass, GeneratedPassword, PasswordConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {length} is too small: {required} character classes must each appear at least once")]
    LengthTooSmall { length: usize, required: usize },

    #[error("Randomness error: {0}")]
    Random(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Holds a randomness source and produces passwords from it.
pub struct PasswordGenerator<R: RandomSource = SecureRandom> {
    rng: R,
}

impl PasswordGenerator<SecureRandom> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: SecureRandom::new(),
        }
    }
}

impl Default for PasswordGenerator<SecureRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, config: &PasswordConfig) -> Result<GeneratedPassword> {
        generate_password(config, &mut self.rng)
    }
}

/// Generates one password satisfying `config`.
///
/// One character is drawn from each active class, the rest are drawn
/// independently from the combined pool, and the whole buffer is then
/// shuffled so the guaranteed characters carry no positional signal.
///
/// # Errors
///
/// Returns [`GeneratorError::LengthTooSmall`] when `config.length` is below
/// the number of active classes. The length is never clamped.
pub fn generate_password<R: RandomSource>(
    config: &PasswordConfig,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    let classes = CharacterClass::active(config);

    let pool: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect();

    let remaining = config
        .length
        .checked_sub(classes.len())
        .ok_or(GeneratorError::LengthTooSmall {
            length: config.length,
            required: classes.len(),
        })?;

    let mut chars = Vec::with_capacity(config.length);
    for class in &classes {
        chars.push(*rng.choice(class.chars())?);
    }
    for _ in 0..remaining {
        chars.push(*rng.choice(&pool)?);
    }

    secure_shuffle(&mut chars, rng)?;

    Ok(GeneratedPassword::new(chars.into_iter().map(char::from).collect()))
}

/// Fisher-Yates shuffle in place, drawing every swap index from `rng`.
pub fn secure_shuffle<T, R: RandomSource>(items: &mut [T], rng: &mut R) -> crate::crypto::Result<()> {
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
