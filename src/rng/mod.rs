//! Secure random sourcing.
//!
//! The generation pipeline never touches the platform RNG directly; it takes
//! a [`RandomSource`] so tests can inject a deterministic sequence and the
//! default source stays swappable.

use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;

/// The platform's secure random source failed to produce bytes.
///
/// Fatal to the generation call. There is deliberately no fallback to a
/// non-cryptographic generator.
#[derive(Debug, Error)]
#[error("secure random source unavailable")]
pub struct RandomSourceUnavailable(#[source] pub rand::Error);

/// A source of cryptographically strong 32-bit values.
pub trait RandomSource {
    /// Draw `n` uniformly distributed `u32` values.
    fn next_u32_array(&mut self, n: usize) -> Result<Vec<u32>, RandomSourceUnavailable>;
}

/// Random source backed by the operating system CSPRNG.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u32_array(&mut self, n: usize) -> Result<Vec<u32>, RandomSourceUnavailable> {
        let mut bytes = vec![0u8; n * 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(RandomSourceUnavailable)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_yields_requested_count() {
        let draws = OsRandom.next_u32_array(32).unwrap();
        assert_eq!(draws.len(), 32);
    }

    #[test]
    fn os_random_is_not_constant() {
        // 16 consecutive equal u32 draws from a working CSPRNG is a 2^-480
        // event; treat it as a broken source.
        let draws = OsRandom.next_u32_array(16).unwrap();
        assert!(draws.iter().any(|&v| v != draws[0]));
    }
}
