//! Cryptographically secure password generation.
//!
//! [`generators::generate_password`] builds a password that contains at
//! least one character from every active [`models::CharacterClass`], using
//! a [`crypto::RandomSource`] for every draw and for the final shuffle.
//! The `cli` and `system` modules wrap it into the `passgen` binary.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod system;

pub use crypto::{CryptoError, RandomSource, SecureRandom};
pub use generators::{generate_password, GeneratorError, PasswordGenerator};
pub use models::{CharacterClass, GeneratedPassword, PasswordConfig};
