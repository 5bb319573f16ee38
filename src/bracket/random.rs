//! Randomness used by the bracket generator
//!
//! Every random decision goes through [`RandomSource`], so callers choose the
//! generator: `rand::rng()` in production, a seeded `SmallRng` for
//! reproducible brackets, or a scripted fake in tests.

use rand::Rng;
use rand::seq::SliceRandom;

pub trait RandomSource {
    /// Picks an index uniformly from `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniformly permutes `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays a fixed list of picks and leaves shuffles as the identity.
    ///
    /// Picks wrap modulo the requested length; once the script runs out
    /// every pick is 0.
    #[derive(Debug, Default)]
    pub struct ScriptedRandom {
        picks: VecDeque<usize>,
        pub shuffles: usize,
    }

    impl ScriptedRandom {
        pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
            ScriptedRandom {
                picks: picks.into_iter().collect(),
                shuffles: 0,
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn pick_index(&mut self, len: usize) -> usize {
            self.picks.pop_front().unwrap_or(0) % len
        }

        fn shuffle<T>(&mut self, _items: &mut [T]) {
            self.shuffles += 1;
        }
    }
}
