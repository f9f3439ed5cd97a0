use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tkpass::securerandom::*;
use tkpass::GenerationError;

// 固定返回值的随机源，用于验证注入
struct ScriptedSource {
    values: Vec<usize>,
    next: usize,
}

impl SecureRandomSource for ScriptedSource {
    fn below(&mut self, n: usize) -> usize {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % n
    }
}

#[test]
fn test_shuffle_uses_injected_source() {
    let mut source = ScriptedSource { values: vec![0], next: 0 };
    let mut items = vec!['a', 'b', 'c'];
    shuffle(&mut items, &mut source);
    // i=2 swaps with 0, then i=1 swaps with 0
    assert_eq!(items, vec!['b', 'c', 'a']);
    assert_eq!(source.next, 2);
}

#[test]
fn test_shuffle_is_uniform() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let trials = 6000;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..trials {
        let mut items = vec!['x', 'y', 'z'];
        shuffle(&mut items, &mut rng);
        *counts.entry(items.into_iter().collect()).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 6);

    let expected = trials as f64 / 6.0;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    // 5 degrees of freedom, p < 0.0002
    assert!(chi_square < 25.0, "chi-square too large: {}", chi_square);
}

#[test]
fn test_shuffle_short_slices() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut empty: Vec<u8> = Vec::new();
    shuffle(&mut empty, &mut rng);
    assert!(empty.is_empty());

    let mut single = vec![5];
    shuffle(&mut single, &mut rng);
    assert_eq!(single, vec![5]);
}

#[test]
fn test_resolve_range_is_inclusive_and_uniform() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let mut counts = [0usize; 13];
    for _ in 0..1000 {
        let value = resolve_range(8, 12, &mut rng).unwrap();
        assert!((8..=12).contains(&value), "out of range: {}", value);
        counts[value] += 1;
    }
    for value in 8..=12 {
        assert!(
            (120..=280).contains(&counts[value]),
            "value {} drawn {} times",
            value,
            counts[value]
        );
    }
}

#[test]
fn test_resolve_range_edge_cases() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    assert_eq!(resolve_range(5, 5, &mut rng), Ok(5));
    assert_eq!(resolve_range(0, 0, &mut rng), Ok(0));
    assert_eq!(
        resolve_range(12, 8, &mut rng),
        Err(GenerationError::InvalidRange { min: 12, max: 8 })
    );
    assert_eq!(
        resolve_range(1, usize::MAX, &mut rng),
        Err(GenerationError::InvalidRange { min: 1, max: usize::MAX })
    );
    assert_eq!(resolve_range(usize::MAX, usize::MAX, &mut rng), Ok(usize::MAX));
}

#[test]
fn test_resolve_bounds() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    assert_eq!(resolve_bounds(&[], &mut rng), Ok(None));
    assert_eq!(resolve_bounds(&[7], &mut rng), Ok(Some(7)));
    let value = resolve_bounds(&[3, 6], &mut rng).unwrap().unwrap();
    assert!((3..=6).contains(&value));
}

#[test]
fn test_choose() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let empty: [u8; 0] = [];
    assert_eq!(rng.choose(&empty), None);

    let items = ["only"];
    assert_eq!(rng.choose(&items), Some(&"only"));

    let mut source = ScriptedSource { values: vec![2], next: 0 };
    assert_eq!(source.choose(&['a', 'b', 'c', 'd']), Some(&'c'));
}
