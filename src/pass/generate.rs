//! Password generation: secure sampling plus variety enforcement.

use crate::rng::RandomSource;

use super::GenerateError;
use super::charset::{self, CategoryFlags};

/// Pools smaller than this carry too little per-character entropy.
/// Heuristic threshold, paired with [`SMALL_POOL_MIN_LENGTH`].
pub const MIN_POOL_LEN: usize = 10;

/// Effective minimum length when the pool is below [`MIN_POOL_LEN`].
pub const SMALL_POOL_MIN_LENGTH: usize = 16;

/// Generate a password of `length` characters from the enabled categories.
///
/// Runs the full pipeline: pool build, secure sampling, variety enforcement.
/// Each call is independent; nothing is shared across invocations beyond the
/// injected random source.
pub fn generate(
    length: usize,
    flags: CategoryFlags,
    rng: &mut dyn RandomSource,
) -> Result<String, GenerateError> {
    if length < 1 {
        return Err(GenerateError::InvalidLength);
    }
    let pool = charset::pool(flags)?;
    let mut candidate = sample(length, &pool, rng)?;
    enforce_variety(&mut candidate, flags, rng)?;
    // Safety: every pool alphabet is ASCII.
    Ok(unsafe { String::from_utf8_unchecked(candidate) })
}

/// Draw `length` characters uniformly from `pool`.
///
/// Indices come from modulo reduction of 32-bit draws. For pool sizes that do
/// not divide 2^32 this carries a small statistical bias; accepted for pools
/// up to ~100 characters. Switch to rejection sampling if stronger uniformity
/// is ever required.
pub(crate) fn sample(
    length: usize,
    pool: &str,
    rng: &mut dyn RandomSource,
) -> Result<Vec<u8>, GenerateError> {
    let bytes = pool.as_bytes();
    let length = if bytes.len() < MIN_POOL_LEN {
        length.max(SMALL_POOL_MIN_LENGTH)
    } else {
        length
    };

    let draws = rng.next_u32_array(length)?;
    Ok(draws
        .iter()
        .map(|&v| bytes[v as usize % bytes.len()])
        .collect())
}

/// Guarantee every enabled category contributes at least one character.
///
/// Each missing category overwrites one independently chosen random position.
/// A later patch may land on an earlier one, so for lengths shorter than the
/// number of missing categories the guarantee is best-effort. Membership is
/// tested against the category's own alphabet, never the full pool.
fn enforce_variety(
    candidate: &mut [u8],
    flags: CategoryFlags,
    rng: &mut dyn RandomSource,
) -> Result<(), GenerateError> {
    let missing: Vec<&'static str> = flags
        .enabled_alphabets()
        .into_iter()
        .filter(|alphabet| !candidate.iter().any(|b| alphabet.as_bytes().contains(b)))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }

    // One position draw and one character draw per missing category.
    let draws = rng.next_u32_array(missing.len() * 2)?;
    for (i, alphabet) in missing.iter().enumerate() {
        let bytes = alphabet.as_bytes();
        let pos = draws[2 * i] as usize % candidate.len();
        candidate[pos] = bytes[draws[2 * i + 1] as usize % bytes.len()];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::OsRandom;
    use crate::rng::testing::{FailingRandom, SeqRandom};

    #[test]
    fn zero_length_is_rejected() {
        let err = generate(0, CategoryFlags::ALL, &mut OsRandom).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidLength));
    }

    #[test]
    fn all_flags_disabled_is_rejected() {
        let flags = CategoryFlags {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        let err = generate(12, flags, &mut OsRandom).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyPool));
    }

    #[test]
    fn failing_source_propagates() {
        let err = generate(12, CategoryFlags::ALL, &mut FailingRandom).unwrap_err();
        assert!(matches!(err, GenerateError::RandomSource(_)));
    }

    #[test]
    fn every_character_comes_from_an_enabled_alphabet() {
        let flags = CategoryFlags {
            uppercase: true,
            lowercase: false,
            numbers: true,
            symbols: false,
        };
        let pool = charset::pool(flags).unwrap();
        for _ in 0..20 {
            let pass = generate(24, flags, &mut OsRandom).unwrap();
            assert_eq!(pass.chars().count(), 24);
            assert!(pass.chars().all(|c| pool.contains(c)), "stray char in {pass:?}");
        }
    }

    #[test]
    fn variety_guarantee_holds_for_every_enabled_category() {
        // Length 32 keeps the chance of two categories missing at once (the
        // only way a patch collision could void the guarantee) negligible.
        for _ in 0..20 {
            let pass = generate(32, CategoryFlags::ALL, &mut OsRandom).unwrap();
            for alphabet in CategoryFlags::ALL.enabled_alphabets() {
                assert!(
                    pass.chars().any(|c| alphabet.contains(c)),
                    "{pass:?} is missing a character from {alphabet:?}"
                );
            }
        }
    }

    #[test]
    fn missing_categories_are_patched_in() {
        // Sixteen zero draws select 'A' every time, leaving lowercase,
        // numbers, and symbols missing. Patch draws then place 'a' at 0,
        // '0' at 1, and '!' at 2.
        let mut rng = SeqRandom::new(
            [vec![0u32; 16], vec![0, 0, 1, 0, 2, 0]].concat(),
        );
        let pass = generate(16, CategoryFlags::ALL, &mut rng).unwrap();
        assert_eq!(&pass[..3], "a0!");
        assert!(pass[3..].chars().all(|c| c == 'A'));
    }

    #[test]
    fn patching_more_categories_than_positions_does_not_panic() {
        // Length 1 with all categories enabled: three patches collide on the
        // single position. Best-effort by design.
        let mut rng = SeqRandom::new(vec![0]);
        let pass = generate(1, CategoryFlags::ALL, &mut rng).unwrap();
        assert_eq!(pass.chars().count(), 1);
    }

    #[test]
    fn small_pools_raise_the_effective_length() {
        let sampled = sample(4, "abcd", &mut OsRandom).unwrap();
        assert_eq!(sampled.len(), SMALL_POOL_MIN_LENGTH);

        // At or above the threshold the requested length stands.
        let sampled = sample(4, charset::NUMBERS, &mut OsRandom).unwrap();
        assert_eq!(sampled.len(), 4);
    }
}
