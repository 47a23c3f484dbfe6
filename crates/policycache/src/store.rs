//! Bounded key/value store driven by an eviction policy
//!
//! `Store` is the single-threaded core: an index from key to list handle,
//! the ordered list holding the entries, and the active policy. [`Cache`]
//! wraps it in a lock for shared use.
//!
//! [`Cache`]: crate::Cache

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::list::{CacheEntry, Handle, OrderedList};
use crate::policy::EvictionPolicy;

/// Fixed-capacity store with pluggable eviction
pub struct Store<K, V, P> {
    index: HashMap<K, Handle, RandomState>,
    list: OrderedList<K, V>,
    policy: P,
    capacity: usize,
}

impl<K, V, P> Store<K, V, P>
where
    K: Hash + Eq + Clone,
    P: EvictionPolicy<K, V>,
{
    /// Create a new store holding at most `capacity` entries
    ///
    /// # Errors
    /// * `Error::ZeroCapacity` - `capacity` is 0
    pub fn new(capacity: usize, policy: P) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        debug!(capacity, policy = policy.name(), "creating cache store");

        Ok(Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: OrderedList::with_capacity(capacity),
            policy,
            capacity,
        })
    }

    /// Insert or replace a value
    ///
    /// The entry lands at the front of the ordering list. Replacing an
    /// existing key frees its slot first, so an update never evicts another
    /// key.
    ///
    /// # Returns
    /// * The entry evicted to make room, if any
    pub fn set(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(handle) = self.index.remove(&key) {
            self.list.remove(handle);
        }

        let evicted = if self.index.len() >= self.capacity {
            Some(self.evict())
        } else {
            None
        };

        let handle = self.list.push_front(CacheEntry::new(key.clone(), value));
        self.index.insert(key, handle);
        self.policy.on_insert(&mut self.list, handle);

        evicted
    }

    /// Look up a value, counting it as an access
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.policy.on_access(&mut self.list, handle);
        self.list.get(handle).map(CacheEntry::value)
    }

    /// Look up a value without informing the policy
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.list.get(handle).map(CacheEntry::value)
    }

    /// Check whether a key is resident (not an access)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Remove a key, returning its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(key)?;
        self.list.remove(handle).map(|entry| entry.into_parts().1)
    }

    /// Keys from the front of the ordering list to the back
    pub fn keys(&self) -> Vec<K> {
        self.list.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of resident entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The active eviction policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        debug!(entries = self.index.len(), "clearing cache store");
        self.index.clear();
        self.list.clear();
    }

    fn evict(&mut self) -> (K, V) {
        // A full store with capacity >= 1 is never empty, so a missing or
        // stale victim means the policy broke its contract.
        let Some(handle) = self.policy.select_victim(&self.list) else {
            panic!(
                "{} policy selected no victim from a full store ({} of {} entries)",
                self.policy.name(),
                self.list.len(),
                self.capacity
            );
        };
        let Some(entry) = self.list.remove(handle) else {
            panic!(
                "{} policy selected a handle that is not resident",
                self.policy.name()
            );
        };

        let removed = self.index.remove(entry.key());
        debug_assert_eq!(removed, Some(handle), "index and list out of sync");

        trace!(
            policy = self.policy.name(),
            len = self.list.len(),
            "evicted entry"
        );

        entry.into_parts()
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.index.len(), self.list.len());
        assert!(self.index.len() <= self.capacity);
        for (key, handle) in &self.index {
            let entry = self.list.get(*handle).expect("index points at vacant node");
            assert!(entry.key() == key, "index handle resolves to another key");
        }
        for entry in self.list.iter() {
            assert!(self.index.contains_key(entry.key()));
        }
    }
}
