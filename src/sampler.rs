//! Input sequences for a run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::sort::ValueRange;

/// The values `1..=length` in ascending order, with their range.
///
/// A non-positive `length` gives an empty sequence and the inverted range
/// `(1, length)`, which the engine treats as nothing to sort.
#[must_use]
pub fn sample_distinct(length: i64) -> (Vec<i64>, ValueRange) {
    ((1..=length).collect(), ValueRange::new(1, length))
}

/// Shuffle `values` in place. A seed makes the permutation reproducible.
pub fn shuffle(values: &mut [i64], seed: Option<u64>) {
    match seed {
        Some(seed) => values.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => values.shuffle(&mut rand::rng()),
    }
}

/// A shuffled sample of `length` distinct values.
#[must_use]
pub fn shuffled_sample(length: i64, seed: Option<u64>) -> (Vec<i64>, ValueRange) {
    let (mut values, range) = sample_distinct(length);
    shuffle(&mut values, seed);
    log::debug!("sampled {} values in {:?}: {:?}", values.len(), range, values);
    (values, range)
}
