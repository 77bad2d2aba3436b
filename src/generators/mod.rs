// src/generators/mod.rs
mod password;

pub use password::{generate_password, secure_shuffle, GeneratorError, PasswordGenerator, Result};
