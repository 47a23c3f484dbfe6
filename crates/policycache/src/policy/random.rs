//! Uniformly random eviction

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use super::EvictionPolicy;
use crate::list::{Handle, OrderedList};

/// Evicts a uniformly chosen resident entry
///
/// Ignores list order entirely. Selection walks the list, so it costs
/// O(len) rather than O(1).
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Random policy seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Random policy with a fixed seed, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> EvictionPolicy<K, V> for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_victim(&mut self, list: &OrderedList<K, V>) -> Option<Handle> {
        list.handles().choose(&mut self.rng)
    }
}
