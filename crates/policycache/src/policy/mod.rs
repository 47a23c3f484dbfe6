//! Eviction policies
//!
//! A policy never owns entries. Every hook receives the store's
//! [`OrderedList`] and works purely in terms of [`Handle`]s, so the ordering
//! state cannot drift away from the index.
//!
//! The store always pushes a new or updated entry to the front of the list.
//! Policies interpret front/back on top of that convention.

mod fifo;
mod lifo;
mod lru;
mod random;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::list::{Handle, OrderedList};

pub use fifo::Fifo;
pub use lifo::Lifo;
pub use lru::Lru;
pub use random::RandomPolicy;

/// Strategy deciding which entry leaves a full cache
///
/// Hooks run inside the cache's critical section. Implementations must not
/// block or take locks of their own.
pub trait EvictionPolicy<K, V>: Send {
    /// Short policy name used in logs
    fn name(&self) -> &'static str;

    /// Called right after a new or replacing entry was pushed to the front
    fn on_insert(&mut self, _list: &mut OrderedList<K, V>, _handle: Handle) {}

    /// Pick the node to evict from a full list
    ///
    /// Returns `None` only when the list is empty.
    fn select_victim(&mut self, list: &OrderedList<K, V>) -> Option<Handle>;

    /// Called on every successful lookup
    fn on_access(&mut self, _list: &mut OrderedList<K, V>, _handle: Handle) {}
}

impl<K, V> EvictionPolicy<K, V> for Box<dyn EvictionPolicy<K, V>> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn on_insert(&mut self, list: &mut OrderedList<K, V>, handle: Handle) {
        (**self).on_insert(list, handle);
    }

    fn select_victim(&mut self, list: &OrderedList<K, V>) -> Option<Handle> {
        (**self).select_victim(list)
    }

    fn on_access(&mut self, list: &mut OrderedList<K, V>, handle: Handle) {
        (**self).on_access(list, handle);
    }
}

/// Built-in policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    /// First in, first out
    Fifo,
    /// Least recently used
    #[default]
    Lru,
    /// Last in, first out
    Lifo,
    /// Uniformly random victim
    Random,
}

impl PolicyKind {
    /// Instantiate the policy behind this kind
    pub fn build<K, V>(self) -> Box<dyn EvictionPolicy<K, V>> {
        match self {
            PolicyKind::Fifo => Box::new(Fifo),
            PolicyKind::Lru => Box::new(Lru),
            PolicyKind::Lifo => Box::new(Lifo),
            PolicyKind::Random => Box::new(RandomPolicy::new()),
        }
    }

    /// Instantiate the policy, seeding it if it is randomized
    pub fn build_seeded<K, V>(self, seed: u64) -> Box<dyn EvictionPolicy<K, V>> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy::with_seed(seed)),
            other => other.build(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Random => "random",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "lifo" => Ok(PolicyKind::Lifo),
            "random" => Ok(PolicyKind::Random),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
