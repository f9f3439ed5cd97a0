//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 1.1.0
// License : Mulan PSL v2
//
// Secure random source

use rand::Rng;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;

use crate::error::GenerationError;

/// Source of uniform randomness for every generator in this crate.
///
/// Production code uses [`OsRng`]; tests inject a seeded [`ChaCha20Rng`]
/// (or any scripted source) to get reproducible output.
pub trait SecureRandomSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    /// Uniform pick of one element, `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.below(items.len());
        items.get(index)
    }
}

impl SecureRandomSource for OsRng {
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

impl SecureRandomSource for ChaCha20Rng {
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Fisher–Yates 洗牌
pub fn shuffle<T, R: SecureRandomSource>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Resolves a `[min, max]` pair to one value, uniform and inclusive on both ends.
///
/// Draws in `[0, max]` and rejects anything below `min`.
pub fn resolve_range<R: SecureRandomSource>(
    min: usize,
    max: usize,
    rng: &mut R,
) -> Result<usize, GenerationError> {
    if min > max {
        return Err(GenerationError::InvalidRange { min, max });
    }
    if min == max {
        return Ok(min);
    }
    let bound = max
        .checked_add(1)
        .ok_or(GenerationError::InvalidRange { min, max })?;
    loop {
        let value = rng.below(bound);
        if value >= min {
            return Ok(value);
        }
    }
}

/// A one- or two-value length argument as given on the command line.
pub fn resolve_bounds<R: SecureRandomSource>(
    bounds: &[usize],
    rng: &mut R,
) -> Result<Option<usize>, GenerationError> {
    match bounds {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        [min, max, ..] => resolve_range(*min, *max, rng).map(Some),
    }
}
