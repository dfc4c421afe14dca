//! Random source used for tie-breaking and difficulty branching.
//!
//! Move selection takes any [`RandomSource`], so tests can swap in a
//! deterministic stub while the engine uses [`FastRng`].

/// A source of uniform random choices.
pub trait RandomSource {
    /// A uniform index in `[0, n)`. `n` is always positive.
    fn pick(&mut self, n: usize) -> usize;

    /// A uniform float in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }

    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }
}

/// Default random source backed by `fastrand`.
#[derive(Clone, Debug)]
pub struct FastRng(fastrand::Rng);

impl FastRng {
    /// Seeded from system entropy.
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    /// Reproducible sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }
}

impl Default for FastRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRng {
    #[inline]
    fn pick(&mut self, n: usize) -> usize {
        self.0.usize(..n)
    }

    #[inline]
    fn uniform(&mut self) -> f64 {
        self.0.f64()
    }
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn choose<T: Copy>(rng: &mut impl RandomSource, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    Some(items[rng.pick(items.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = FastRng::with_seed(42);
        let mut b = FastRng::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.pick(225), b.pick(225));
        }
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn test_pick_and_uniform_ranges() {
        let mut rng = FastRng::with_seed(7);
        for n in 1..50 {
            assert!(rng.pick(n) < n);
        }
        for _ in 0..1000 {
            let x = rng.uniform();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = FastRng::with_seed(1);
        let empty: [u8; 0] = [];
        assert_eq!(choose(&mut rng, &empty), None);
        assert_eq!(choose(&mut rng, &[9]), Some(9));
        let picked = choose(&mut rng, &[1, 2, 3]).unwrap();
        assert!([1, 2, 3].contains(&picked));
    }
}
