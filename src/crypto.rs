// src/crypto.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid sampling bound: {bound} (must be positive)")]
    InvalidBound { bound: usize },

    #[error("Cannot choose from an empty sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Unbiased sampling on top of a cryptographically secure generator.
///
/// Implemented for every `RngCore + CryptoRng`, so a plain seedable
/// PRNG like `SmallRng` cannot be passed where a `RandomSource` is wanted.
pub trait RandomSource {
    /// Returns an integer in `[0, bound)`, every value equally likely.
    ///
    /// Raw 64-bit draws in the top `2^64 mod bound` values are rejected
    /// and redrawn, so the final reduction carries no modulo bias.
    fn uniform_int(&mut self, bound: usize) -> Result<usize>;

    /// Picks one element of `items` uniformly.
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(CryptoError::EmptySequence);
        }
        let idx = self.uniform_int(items.len())?;
        Ok(&items[idx])
    }
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn uniform_int(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(CryptoError::InvalidBound { bound });
        }

        let range = bound as u64;
        // Number of raw values past the last full multiple of `range`
        let excess = (u64::MAX % range + 1) % range;
        let limit = u64::MAX - excess;

        loop {
            let value = self.next_u64();
            if value <= limit {
                return Ok((value % range) as usize);
            }
        }
    }
}

/// Operating-system entropy, the production randomness source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandom(OsRng);

impl SecureRandom {
    pub fn new() -> Self {
        SecureRandom(OsRng)
    }
}

impl RngCore for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRandom {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::VecDeque;

    /// Replays a fixed list of raw words.
    struct ScriptedRng(VecDeque<u64>);

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0.pop_front().expect("script exhausted")
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand_core::impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    fn scripted(words: &[u64]) -> ScriptedRng {
        ScriptedRng(words.iter().copied().collect())
    }

    #[test]
    fn zero_bound_is_rejected() {
        let mut rng = SecureRandom::new();
        assert_eq!(
            rng.uniform_int(0),
            Err(CryptoError::InvalidBound { bound: 0 })
        );
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut rng = SecureRandom::new();
        for _ in 0..100 {
            assert_eq!(rng.uniform_int(1), Ok(0));
        }
    }

    #[test]
    fn values_stay_in_range() {
        let mut rng = SecureRandom::new();
        for bound in [2usize, 3, 7, 10, 26, 88, 128] {
            for _ in 0..500 {
                let v = rng.uniform_int(bound).unwrap();
                assert!(v < bound);
            }
        }
    }

    #[test]
    fn biased_tail_is_redrawn() {
        // 2^64 mod 3 == 1, so only u64::MAX falls in the rejected tail
        let mut rng = scripted(&[u64::MAX, 5]);
        assert_eq!(rng.uniform_int(3), Ok(2));
        assert!(rng.0.is_empty());
    }

    #[test]
    fn power_of_two_bound_never_rejects() {
        let mut rng = scripted(&[u64::MAX]);
        assert_eq!(rng.uniform_int(8), Ok(7));
    }

    #[test]
    fn largest_accepted_value_is_kept() {
        let mut rng = scripted(&[u64::MAX - 1]);
        assert_eq!(rng.uniform_int(3), Ok(((u64::MAX - 1) % 3) as usize));
    }

    #[test]
    fn distribution_is_roughly_uniform() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        let bound = 10usize;
        let trials = 10_000usize;
        let mut counts = vec![0usize; bound];
        for _ in 0..trials {
            counts[rng.uniform_int(bound).unwrap()] += 1;
        }

        let expected = trials as f64 / bound as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // 9 degrees of freedom, p = 0.0001
        assert!(chi_square < 33.72, "chi-square {} counts {:?}", chi_square, counts);
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn choice_on_empty_slice_fails() {
        let mut rng = SecureRandom::new();
        let empty: [u8; 0] = [];
        assert_eq!(rng.choice(&empty), Err(CryptoError::EmptySequence));
    }

    #[test]
    fn choice_indexes_with_uniform_int() {
        let mut rng = scripted(&[4]);
        let items = ['a', 'b', 'c'];
        assert_eq!(rng.choice(&items), Ok(&'b'));
    }

    #[test]
    fn choice_covers_every_element() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let items = [1u8, 2, 3, 4];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = *rng.choice(&items).unwrap();
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
