use rand::{Rng, rng};

/// A trait for random sources that draw charset indices.
///
/// Swapping the implementation is how tests pin every draw to a known
/// character.
///
/// # Example
/// ```
/// use shortid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand_index(&self, _bound: usize) -> usize {
///         3
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand_index(16), 3);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// `bound` must be nonzero.
    fn rand_index(&self, bound: usize) -> usize;
}

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// Each OS thread owns one generator, seeded once by the OS rather than by
/// the wall clock and reseeded periodically, so draws stay uncorrelated
/// under high call rates. The wrapper itself is zero-sized and thread-safe:
/// it looks up the thread-local generator on every draw instead of storing
/// it.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand_index(&self, bound: usize) -> usize {
        rng().random_range(0..bound)
    }
}
