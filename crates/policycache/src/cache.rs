//! Cache: thread-safe front end over the policy-driven store

use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::error::Result;
use crate::policy::{EvictionPolicy, PolicyKind};
use crate::store::Store;

/// Cache whose policy is chosen at runtime
pub type DynCache<K, V> = Cache<K, V, Box<dyn EvictionPolicy<K, V>>>;

/// Bounded key/value cache shared across threads
///
/// Every operation takes the same lock for its full duration, covering the
/// index, the ordering list and the policy together. Share it with `Arc`.
pub struct Cache<K, V, P> {
    /// Store guarded by the single critical section
    inner: Mutex<Store<K, V, P>>,

    /// Cache capacity
    capacity: usize,
}

impl<K, V, P> Cache<K, V, P>
where
    K: Hash + Eq + Clone,
    P: EvictionPolicy<K, V>,
{
    /// Create a new cache with the given capacity and policy
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, must be at least 1
    /// * `policy` - Eviction policy consulted when the cache is full
    ///
    /// # Returns
    /// * `Result<Cache>` - `Error::ZeroCapacity` if `capacity` is 0
    pub fn new(capacity: usize, policy: P) -> Result<Self> {
        let store = Store::new(capacity, policy)?;

        Ok(Self {
            inner: Mutex::new(store),
            capacity,
        })
    }

    /// Insert or replace a value
    ///
    /// # Returns
    /// * The entry evicted to make room, if any
    pub fn set(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().set(key, value)
    }

    /// Look up a value, counting it as an access
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Check whether a key is resident without counting an access
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains_key(key)
    }

    /// Remove a key, returning its value
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    /// Snapshot of resident keys, front of the ordering list first
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys()
    }

    /// Get current number of entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Name of the active eviction policy
    pub fn policy_name(&self) -> &'static str {
        self.inner.lock().policy().name()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K, V> Cache<K, V, Box<dyn EvictionPolicy<K, V>>>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache using one of the built-in policies
    pub fn with_kind(capacity: usize, kind: PolicyKind) -> Result<Self> {
        Self::new(capacity, kind.build())
    }
}
