//! Unbiased in-place shuffling.
//!
//! Both the flashcard deck and quiz synthesis reorder terms through
//! [`SliceRandom::shuffle`], a Fisher–Yates sweep, so every permutation is
//! equally likely for a uniform random source.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle a slice in place.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use studyset_engine::shuffle::shuffle;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut cards = vec![1, 2, 3, 4, 5];
/// shuffle(&mut cards, &mut rng);
///
/// cards.sort();
/// assert_eq!(cards, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}

/// Return a shuffled copy of a slice, leaving the input untouched.
pub fn shuffled<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}
