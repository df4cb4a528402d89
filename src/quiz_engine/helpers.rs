//! Shared building blocks used by the sampler, the option shuffler, and the
//! session.
//!
//! ## RNG ordering
//!
//! `fisher_yates()` draws exactly `len - 1` values from the RNG, walking from
//! the last slot down to slot 1. A session start therefore consumes one bank
//! shuffle followed by one option shuffle per drawn question, in draw order.
//! Changing that order changes which session a given seed reproduces, so the
//! determinism tests pin it.

use rand::Rng;

/// In-place Fisher-Yates shuffle. Every permutation is equally likely.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle an owned copy of `items`, leaving the input untouched.
pub fn shuffled_copy<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    fisher_yates(&mut copy, rng);
    copy
}

/// `correct / total * 100` rounded to the nearest integer, halves rounding up.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

/// Share of the session reached when showing question `index` (0-based).
pub fn progress_fraction(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fisher_yates_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..30).collect();
        fisher_yates(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn fisher_yates_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled_copy(&(0..10).collect::<Vec<u32>>(), &mut rng)
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn empty_and_single_slices_are_fine() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        let mut one = vec![7u8];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(percentage(4, 4), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn progress_counts_the_shown_question() {
        assert!((progress_fraction(0, 4) - 0.25).abs() < f32::EPSILON);
        assert!((progress_fraction(3, 4) - 1.0).abs() < f32::EPSILON);
    }
}
