//! Unbiased random index sampling over an alphabet.
//!
//! Draws are taken from a fallible RNG ([`TryRngCore`]) so that a broken
//! entropy source surfaces as [`IdError::EntropyFailure`] instead of a
//! panic. Production callers pass [`rand::rngs::OsRng`]; tests pass a
//! scripted source.
//!
//! Indices are drawn by rejection sampling over 16-bit values: a draw is
//! discarded and retried whenever it falls in the truncated tail of the
//! range, which would otherwise bias the low indices for any alphabet size
//! that does not divide 65536. A plain `v % n` is not an acceptable
//! shortcut here.

use rand::TryRngCore;

use crate::alphabet::{MAX_ALPHABET_LEN, MIN_ALPHABET_LEN};
use crate::error::IdError;

/// Size of the per-draw sample space (one 16-bit value).
const DRAW_RANGE: u32 = 1 << 16;

/// Draws one index uniformly from `[0, n)`.
///
/// Fails with [`IdError::AlphabetTooSmall`] if `n < 2`, with
/// [`IdError::AlphabetTooLarge`] if `n > 65536`, and with
/// [`IdError::EntropyFailure`] if the RNG cannot supply bytes. The
/// rejection retry loop has no iteration cap; for a working random source
/// the expected number of redraws is below one for every valid `n`.
pub fn random_index<R: TryRngCore + ?Sized>(rng: &mut R, n: usize) -> Result<usize, IdError> {
    if n < MIN_ALPHABET_LEN {
        return Err(IdError::AlphabetTooSmall { len: n });
    }
    if n > MAX_ALPHABET_LEN {
        return Err(IdError::AlphabetTooLarge { len: n });
    }

    let n = n as u32;
    let limit = DRAW_RANGE - (DRAW_RANGE % n);

    let mut buf = [0u8; 2];
    loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(|_| IdError::EntropyFailure)?;
        let v = u32::from(u16::from_be_bytes(buf));
        if v < limit {
            return Ok((v % n) as usize);
        }
    }
}

/// Draws `count` independent uniform indices from `[0, n)`.
///
/// Any single failed draw aborts the whole operation; no partial sequence
/// is returned.
pub fn draw_indices<R: TryRngCore + ?Sized>(
    rng: &mut R,
    n: usize,
    count: usize,
) -> Result<Vec<usize>, IdError> {
    let mut indices = Vec::with_capacity(count);
    for _ in 0..count {
        indices.push(random_index(rng, n)?);
    }
    Ok(indices)
}


#[cfg(test)]
mod tests {
    use super::test_support::{FailingRng, ScriptedRng};
    use super::*;

    use rand::rngs::OsRng;

    #[test]
    fn test_index_always_in_range() {
        for _ in 0..1_000 {
            let idx = random_index(&mut OsRng, 3).unwrap();
            assert!(idx < 3);
        }
    }

    #[test]
    fn test_uniformity_chi_square() {
        // n = 3 does not divide 65536, so a biased modulo would show up
        // here. df = 2; the 99.99% chi-square critical value is 18.4.
        const DRAWS: usize = 100_000;
        let indices = draw_indices(&mut OsRng, 3, DRAWS).unwrap();

        let mut counts = [0usize; 3];
        for idx in indices {
            counts[idx] += 1;
        }

        let expected = DRAWS as f64 / 3.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(
            chi_square < 18.4,
            "distribution not uniform: counts={counts:?} chi2={chi_square}"
        );
    }

    #[test]
    fn test_rejects_out_of_limit_draw() {
        // For n = 3 the acceptance limit is 65535, so 0xFFFF must be
        // discarded and the next draw (5) used instead.
        let mut rng = ScriptedRng::new([0xFF, 0xFF, 0x00, 0x05]);
        assert_eq!(random_index(&mut rng, 3).unwrap(), 5 % 3);
    }

    #[test]
    fn test_accepts_max_draw_for_power_of_two() {
        // n = 256 divides 65536; nothing is ever rejected.
        let mut rng = ScriptedRng::new([0xFF, 0xFF]);
        assert_eq!(random_index(&mut rng, 256).unwrap(), 255);
    }

    #[test]
    fn test_big_endian_combination() {
        let mut rng = ScriptedRng::new([0x01, 0x00]);
        // 0x0100 = 256; 256 % 256 = 0, not 1.
        assert_eq!(random_index(&mut rng, 256).unwrap(), 0);
    }

    #[test]
    fn test_too_small_n() {
        assert_eq!(
            random_index(&mut OsRng, 0),
            Err(IdError::AlphabetTooSmall { len: 0 })
        );
        assert_eq!(
            random_index(&mut OsRng, 1),
            Err(IdError::AlphabetTooSmall { len: 1 })
        );
    }

    #[test]
    fn test_too_large_n() {
        // 65536 is the largest permitted n; one past it is rejected.
        assert!(random_index(&mut OsRng, 1 << 16).unwrap() < (1 << 16));
        assert_eq!(
            random_index(&mut OsRng, (1 << 16) + 1),
            Err(IdError::AlphabetTooLarge {
                len: (1 << 16) + 1
            })
        );
    }

    #[test]
    fn test_entropy_failure() {
        assert_eq!(
            random_index(&mut FailingRng, 3),
            Err(IdError::EntropyFailure)
        );
        assert_eq!(
            draw_indices(&mut FailingRng, 3, 32),
            Err(IdError::EntropyFailure)
        );
    }

    #[test]
    fn test_draw_indices_count() {
        let indices = draw_indices(&mut OsRng, 152, 32).unwrap();
        assert_eq!(indices.len(), 32);
        assert!(indices.iter().all(|&i| i < 152));
    }
}
