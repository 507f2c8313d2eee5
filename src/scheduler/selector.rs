//! Candidate selection policies.
//!
//! The engine never touches a random number generator directly. Every
//! ordering decision goes through a [`Selector`], so callers can seed it or
//! swap in a deterministic policy to get exact, repeatable outcomes.

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Orders and picks candidates for shift slots.
pub trait Selector {
    /// Reorders preference candidates before they are admitted in turn.
    fn shuffle(&mut self, candidates: &mut [&str]);

    /// Picks one backfill candidate out of `len`, or `None` if `len == 0`.
    fn choose(&mut self, len: usize) -> Option<usize>;
}

/// Uniformly random selection backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<ThreadRng> {
    /// Uses the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomSelector<StdRng> {
    /// Reproducible selection from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Selector for RandomSelector<R> {
    fn shuffle(&mut self, candidates: &mut [&str]) {
        candidates.shuffle(&mut self.rng);
    }

    fn choose(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Keeps candidates in registry order and always picks the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct InOrder;

impl Selector for InOrder {
    fn shuffle(&mut self, _candidates: &mut [&str]) {}

    fn choose(&mut self, len: usize) -> Option<usize> {
        (len > 0).then_some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order() {
        let mut sel = InOrder;
        let mut names = ["Carol", "Alice", "Bob"];
        sel.shuffle(&mut names);
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
        assert_eq!(sel.choose(3), Some(0));
        assert_eq!(sel.choose(0), None);
    }

    #[test]
    fn test_random_choose_in_range() {
        let mut sel = RandomSelector::seeded(7);
        assert_eq!(sel.choose(0), None);
        for _ in 0..100 {
            let idx = sel.choose(4).unwrap();
            assert!(idx < 4);
        }
    }

    #[test]
    fn test_random_shuffle_is_permutation() {
        let mut sel = RandomSelector::seeded(42);
        let mut names = ["A", "B", "C", "D", "E"];
        sel.shuffle(&mut names);
        let mut sorted = names;
        sorted.sort_unstable();
        assert_eq!(sorted, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomSelector::seeded(99);
        let mut b = RandomSelector::seeded(99);
        let picks_a: Vec<_> = (0..20).map(|_| a.choose(10)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.choose(10)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_thread_selector() {
        let mut sel = RandomSelector::thread();
        assert!(sel.choose(5).unwrap() < 5);
    }
}
